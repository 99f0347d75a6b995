/// Entity-level CRUD against an in-memory store
pub mod cafe_tests;
