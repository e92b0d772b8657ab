// SPDX-License-Identifier: MIT
//
// ramp-color — RGB value type for the ramp gradient engine.
//
// A deliberately small crate: one color type in final channel units
// (0–255), with the channel arithmetic the gradient engine needs and
// nothing else. Color spaces, terminal escape emission, and palette
// logic all live outside — higher layers consume the `Rgb` values this
// crate produces.

pub mod rgb;

pub use rgb::Rgb;
