//! Model -> entity mappers

mod activity;
