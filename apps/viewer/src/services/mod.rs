//! Service layer: orchestration between routes, the upstream source and
//! the domain.

pub mod view;
