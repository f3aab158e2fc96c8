//! Flutter bridge for OneDay home widgets.

pub mod api;
