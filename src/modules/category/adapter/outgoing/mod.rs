pub mod category_query_postgres;
pub mod sea_orm_entity;

pub use category_query_postgres::CategoryQueryPostgres;
