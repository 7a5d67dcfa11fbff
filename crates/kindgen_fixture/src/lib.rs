//! Generator output compiled as ordinary Rust.
//!
//! Each module includes the file `build.rs` generated from the header of the same name under `kinds/`.

/// `kinds/logic_kinds.h`: `AND`, `OR`, `NOT`.
pub mod logic {
    include!(concat!(env!("OUT_DIR"), "/logic_kind.rs"));
}

/// `kinds/api_kinds.h`: an excerpt of the public API kinds, `INTERNAL_KIND` through `LAST_KIND`.
pub mod api {
    include!(concat!(env!("OUT_DIR"), "/api_kind.rs"));
}

/// `kinds/empty_kinds.h`: a kinds enum with no members.
pub mod empty {
    include!(concat!(env!("OUT_DIR"), "/empty_kind.rs"));
}
