//! Property tests for placement and merging.

use std::ffi::OsStr;
use std::path::Path;

use proptest::prelude::*;

use append_sw::domain::services::merge;
use append_sw::{Mode, Placement, WriteStrategy, SERVICE_WORKER_PATH};

fn basename() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,31}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Default),
        Just(Mode::Dev),
        Just(Mode::Build),
        Just(Mode::Replace),
    ]
}

fn directory() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    proptest::collection::vec(segment, 0..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Placement depends only on the mode and the entry's base name.
    #[test]
    fn property_placement_ignores_entry_directory(
        mode in mode(),
        name in basename(),
        dir_a in directory(),
        dir_b in directory(),
    ) {
        let a = Path::new(&dir_a).join(&name);
        let b = Path::new(&dir_b).join(&name);

        prop_assert_eq!(
            Placement::for_entry(mode, &a),
            Placement::for_entry(mode, &b)
        );
        prop_assert_eq!(
            Placement::for_entry(mode, &a),
            Some(Placement::new(mode, OsStr::new(&name)))
        );
    }

    /// PROPERTY: Only the default mode appends; every other mode overwrites.
    #[test]
    fn property_only_default_appends(mode in mode(), name in basename()) {
        let placement = Placement::new(mode, OsStr::new(&name));
        prop_assert_eq!(
            placement.strategy == WriteStrategy::Append,
            mode == Mode::Default
        );
    }

    /// PROPERTY: dev/build keep the base name; default/replace target the service worker.
    #[test]
    fn property_target_directory(mode in mode(), name in basename()) {
        let placement = Placement::new(mode, OsStr::new(&name));
        let expected = match mode {
            Mode::Dev => Path::new("public").join(&name),
            Mode::Build => Path::new("build").join(&name),
            Mode::Default | Mode::Replace => Path::new(SERVICE_WORKER_PATH).to_path_buf(),
        };
        prop_assert_eq!(placement.target, expected);
    }

    /// PROPERTY: merge is exactly `existing + "\n" + content`.
    #[test]
    fn property_merge_is_newline_join(
        existing in "(?s).{0,128}",
        content in "(?s).{0,128}",
    ) {
        let merged = merge(&existing, &content);
        prop_assert_eq!(merged.len(), existing.len() + 1 + content.len());
        prop_assert!(merged.starts_with(&existing));
        prop_assert!(merged.ends_with(&content));
        prop_assert_eq!(merged.as_bytes()[existing.len()], b'\n');
    }

    /// PROPERTY: Overwrite placements ignore whatever is on disk.
    #[test]
    fn property_overwrite_ignores_existing(
        name in basename(),
        existing in proptest::option::of("(?s).{0,64}"),
        content in "(?s).{0,64}",
    ) {
        for mode in [Mode::Dev, Mode::Build, Mode::Replace] {
            let placement = Placement::new(mode, OsStr::new(&name));
            prop_assert_eq!(placement.content_for(existing.as_deref(), &content), content.clone());
        }
    }

    /// PROPERTY: Mode parsing never panics and unknown names fall back to append.
    #[test]
    fn property_lenient_mode_parsing(raw in "(?s).{0,32}") {
        let parsed = Mode::parse_lenient(&raw);
        if Mode::recognize(&raw).is_none() {
            prop_assert_eq!(parsed, Mode::Default);
        }
    }
}
