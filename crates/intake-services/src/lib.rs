//! intake-services
//!
//! Data-access seams for the intake form: address lookup, the assessment
//! catalog, and the evaluation backend. Static implementations are backed
//! by `intake_core::reference`; the evaluation backend also has an HTTP
//! implementation.

pub mod address;
pub mod catalog;
pub mod error;
pub mod evaluation;

use std::future::Future;
use std::pin::Pin;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
