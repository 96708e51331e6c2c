//! Embedded tile distributions
//!
//! Tables compiled into the binary at build time from `data/distributions`.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/distributions.rs"));
