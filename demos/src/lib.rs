//! # Closure Kit Demos
//!
//! One example per closure idiom.
//!
//! ## Available Examples
//!
//! 1. **01_data_hiding** - account handle with a private balance
//! 2. **02_callback** - click handler that remembers a username
//! 3. **03_decorator** - logging decorator around `add`
//! 4. **04_factory** - `square` and `cube` from one power factory
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run -p closure-kit-demos --example 01_data_hiding
//! cargo run -p closure-kit-demos --example 02_callback
//! cargo run -p closure-kit-demos --example 03_decorator
//! cargo run -p closure-kit-demos --example 04_factory
//! ```

// This crate only contains examples, no library code.
