#![allow(clippy::cast_precision_loss)]

mod grid;
mod sobol;
