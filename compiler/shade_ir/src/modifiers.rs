//! Declaration modifiers and `layout(...)` qualifiers.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Storage, interpolation, precision and inlining qualifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ModifierFlags: u32 {
        const CONST = 1 << 0;
        const IN = 1 << 1;
        const OUT = 1 << 2;
        const UNIFORM = 1 << 3;
        const FLAT = 1 << 4;
        const NO_PERSPECTIVE = 1 << 5;
        const HAS_SIDE_EFFECTS = 1 << 6;
        const INLINE = 1 << 7;
        const NO_INLINE = 1 << 8;
        const HIGHP = 1 << 9;
        const MEDIUMP = 1 << 10;
        const LOWP = 1 << 11;
        const ES3 = 1 << 12;
    }
}

impl ModifierFlags {
    /// Storage qualifiers rejected on interface block members.
    pub const STORAGE: ModifierFlags = ModifierFlags::CONST
        .union(ModifierFlags::IN)
        .union(ModifierFlags::OUT)
        .union(ModifierFlags::UNIFORM);

    /// Qualifiers that forbid writes to the declared variable.
    pub const IMMUTABLE: ModifierFlags = ModifierFlags::CONST.union(ModifierFlags::UNIFORM);

    /// Qualifier keywords in canonical order, used for display.
    const NAMES: &'static [(ModifierFlags, &'static str)] = &[
        (ModifierFlags::UNIFORM, "uniform"),
        (ModifierFlags::CONST, "const"),
        (ModifierFlags::FLAT, "flat"),
        (ModifierFlags::NO_PERSPECTIVE, "noperspective"),
        (ModifierFlags::HAS_SIDE_EFFECTS, "hasSideEffects"),
        (ModifierFlags::INLINE, "inline"),
        (ModifierFlags::NO_INLINE, "noinline"),
        (ModifierFlags::HIGHP, "highp"),
        (ModifierFlags::MEDIUMP, "mediump"),
        (ModifierFlags::LOWP, "lowp"),
        (ModifierFlags::ES3, "es3"),
    ];
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut word = |f: &mut fmt::Formatter<'_>, text: &str| {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(text)
        };
        for &(flag, name) in Self::NAMES {
            if self.contains(flag) {
                word(f, name)?;
            }
        }
        if self.contains(ModifierFlags::IN | ModifierFlags::OUT) {
            word(f, "inout")?;
        } else if self.contains(ModifierFlags::IN) {
            word(f, "in")?;
        } else if self.contains(ModifierFlags::OUT) {
            word(f, "out")?;
        }
        Ok(())
    }
}

bitflags! {
    /// Boolean layout keys plus presence bits for the integer-valued keys.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LayoutFlags: u32 {
        const ORIGIN_UPPER_LEFT = 1 << 0;
        const BLEND_SUPPORT_ALL_EQUATIONS = 1 << 1;
        const PUSH_CONSTANT = 1 << 2;
        const SRGB_UNPREMUL = 1 << 3;
        const LOCATION = 1 << 4;
        const OFFSET = 1 << 5;
        const BINDING = 1 << 6;
        const INDEX = 1 << 7;
        const SET = 1 << 8;
        const BUILTIN = 1 << 9;
        const INPUT_ATTACHMENT_INDEX = 1 << 10;
    }
}

/// Contents of a `layout(...)` qualifier list.
///
/// Integer keys hold `-1` when absent; the matching presence bit in
/// `flags` is set when a value was written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Layout {
    pub flags: LayoutFlags,
    pub location: i32,
    pub offset: i32,
    pub binding: i32,
    pub index: i32,
    pub set: i32,
    pub builtin: i32,
    pub input_attachment_index: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            flags: LayoutFlags::empty(),
            location: -1,
            offset: -1,
            binding: -1,
            index: -1,
            set: -1,
            builtin: -1,
            input_attachment_index: -1,
        }
    }
}

impl Layout {
    /// Store the value for an integer key and mark it present.
    ///
    /// Returns `false` for flags that carry no value.
    pub fn set_value(&mut self, key: LayoutFlags, value: i32) -> bool {
        let slot = if key == LayoutFlags::LOCATION {
            &mut self.location
        } else if key == LayoutFlags::OFFSET {
            &mut self.offset
        } else if key == LayoutFlags::BINDING {
            &mut self.binding
        } else if key == LayoutFlags::INDEX {
            &mut self.index
        } else if key == LayoutFlags::SET {
            &mut self.set
        } else if key == LayoutFlags::BUILTIN {
            &mut self.builtin
        } else if key == LayoutFlags::INPUT_ATTACHMENT_INDEX {
            &mut self.input_attachment_index
        } else {
            return false;
        };
        *slot = value;
        self.flags |= key;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Qualifiers attached to a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Modifiers {
    pub layout: Layout,
    pub flags: ModifierFlags,
}

impl Modifiers {
    pub fn new(layout: Layout, flags: ModifierFlags) -> Self {
        Modifiers { layout, flags }
    }

    #[inline]
    pub fn has(&self, flags: ModifierFlags) -> bool {
        self.flags.intersects(flags)
    }
}

#[cfg(test)]
mod tests;
