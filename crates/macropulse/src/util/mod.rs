//! Utility modules for the command-line front end

pub mod io;
