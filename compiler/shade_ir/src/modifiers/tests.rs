use super::*;

#[test]
fn test_modifier_display() {
    let flags = ModifierFlags::CONST | ModifierFlags::HIGHP;
    assert_eq!(flags.to_string(), "const highp");
    assert_eq!((ModifierFlags::IN | ModifierFlags::OUT).to_string(), "inout");
    assert_eq!(ModifierFlags::empty().to_string(), "");
}

#[test]
fn test_layout_set_value() {
    let mut layout = Layout::default();
    assert!(layout.is_empty());
    assert!(layout.set_value(LayoutFlags::BINDING, 3));
    assert_eq!(layout.binding, 3);
    assert!(layout.flags.contains(LayoutFlags::BINDING));
    assert!(!layout.set_value(LayoutFlags::PUSH_CONSTANT, 1));
}

#[test]
fn test_immutable_flags() {
    let modifiers = Modifiers::new(Layout::default(), ModifierFlags::UNIFORM);
    assert!(modifiers.has(ModifierFlags::IMMUTABLE));
    assert!(!modifiers.has(ModifierFlags::OUT));
}
