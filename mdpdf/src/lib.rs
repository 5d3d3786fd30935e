//! Library side of the `mdpdf` binary: command line parsing, document
//! conversion and output engines. Exposed mainly for testing.
pub mod cli;
pub mod convert;
pub mod error;
pub mod html;
pub mod render;
pub mod utils;
