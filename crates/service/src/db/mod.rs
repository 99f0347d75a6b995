pub mod cafe_service;
