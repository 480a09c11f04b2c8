//! One handler per resource. Each takes an [`HttpEvent`](crate::event::HttpEvent),
//! dispatches on the method and always answers with an
//! [`HttpResponse`](crate::event::HttpResponse); errors are rendered, never propagated.

pub mod about;
pub mod photos;
pub mod reviews;
pub mod upload;
