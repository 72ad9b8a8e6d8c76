//! Parameter binding utilities for database queries.
//!
//! `BindParam` binds a `QueryParam` onto a backend's query object. It is
//! implemented for every backend the crate is built with and is what lets
//! `query_one` and `query_all` stay generic over the database.

use crate::models::QueryParam;
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::{Database, MySql, Postgres, Sqlite};

/// A query carrying the backend's own argument buffer.
pub type BoundQuery<'q, DB> = Query<'q, DB, <DB as Database>::Arguments<'q>>;

/// Backends that can bind a `QueryParam`.
pub trait BindParam: Database {
    fn bind_param<'q>(query: BoundQuery<'q, Self>, param: &'q QueryParam) -> BoundQuery<'q, Self>;

    /// Bind every parameter in order.
    fn bind_all<'q>(mut query: BoundQuery<'q, Self>, params: &'q [QueryParam]) -> BoundQuery<'q, Self> {
        for param in params {
            query = Self::bind_param(query, param);
        }
        query
    }
}

impl BindParam for MySql {
    fn bind_param<'q>(query: BoundQuery<'q, Self>, param: &'q QueryParam) -> BoundQuery<'q, Self> {
        match param {
            QueryParam::Null => query.bind(None::<String>),
            QueryParam::Bool(v) => query.bind(*v),
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
            QueryParam::String(v) => query.bind(v.as_str()),
            QueryParam::Bytes(v) => query.bind(v.as_slice()),
            QueryParam::Json(v) => query.bind(Json(v)),
        }
    }
}

impl BindParam for Postgres {
    fn bind_param<'q>(query: BoundQuery<'q, Self>, param: &'q QueryParam) -> BoundQuery<'q, Self> {
        match param {
            QueryParam::Null => query.bind(None::<String>),
            QueryParam::Bool(v) => query.bind(*v),
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
            QueryParam::String(v) => query.bind(v.as_str()),
            QueryParam::Bytes(v) => query.bind(v.as_slice()),
            QueryParam::Json(v) => query.bind(Json(v)),
        }
    }
}

impl BindParam for Sqlite {
    fn bind_param<'q>(query: BoundQuery<'q, Self>, param: &'q QueryParam) -> BoundQuery<'q, Self> {
        match param {
            QueryParam::Null => query.bind(None::<String>),
            QueryParam::Bool(v) => query.bind(*v),
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
            QueryParam::String(v) => query.bind(v.as_str()),
            QueryParam::Bytes(v) => query.bind(v.as_slice()),
            // SQLite doesn't have native JSON type, store as string
            QueryParam::Json(v) => query.bind(v.to_string()),
        }
    }
}
