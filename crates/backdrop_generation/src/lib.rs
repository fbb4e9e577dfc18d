//! Carousel background generation.
//!
//! [`CarouselGenerator`] ties the prompt catalog, reference preparation, the
//! image backend and the output store together, one slide at a time.

mod generator;

pub use generator::CarouselGenerator;
