//! DOM-free widget logic. Each controller talks to the page through a small
//! trait so it can run against the real DOM or an in-memory fake.

pub mod flip;
pub mod parallax;
pub mod roi;
