//! Layout qualifier keys.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use shade_ir::LayoutFlags;

/// Recognized `layout(...)` keys. Built once on first use and read-only
/// afterwards.
static LAYOUT_KEYS: LazyLock<FxHashMap<&'static str, LayoutFlags>> = LazyLock::new(|| {
    [
        ("location", LayoutFlags::LOCATION),
        ("offset", LayoutFlags::OFFSET),
        ("binding", LayoutFlags::BINDING),
        ("index", LayoutFlags::INDEX),
        ("set", LayoutFlags::SET),
        ("builtin", LayoutFlags::BUILTIN),
        ("input_attachment_index", LayoutFlags::INPUT_ATTACHMENT_INDEX),
        ("origin_upper_left", LayoutFlags::ORIGIN_UPPER_LEFT),
        (
            "blend_support_all_equations",
            LayoutFlags::BLEND_SUPPORT_ALL_EQUATIONS,
        ),
        ("push_constant", LayoutFlags::PUSH_CONSTANT),
        ("srgb_unpremul", LayoutFlags::SRGB_UNPREMUL),
    ]
    .into_iter()
    .collect()
});

pub(crate) fn layout_key(name: &str) -> Option<LayoutFlags> {
    LAYOUT_KEYS.get(name).copied()
}

/// Whether `key` takes an `= value` argument.
pub(crate) fn takes_value(key: LayoutFlags) -> bool {
    LayoutFlags::LOCATION
        .union(LayoutFlags::OFFSET)
        .union(LayoutFlags::BINDING)
        .union(LayoutFlags::INDEX)
        .union(LayoutFlags::SET)
        .union(LayoutFlags::BUILTIN)
        .union(LayoutFlags::INPUT_ATTACHMENT_INDEX)
        .contains(key)
}
