#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use workbench_layout::{Insets, LayoutInputs, Orientation, SingleRowLayout, Size, Strategy};

#[derive(Debug, Arbitrary)]
struct PassInput {
    placement: u8,
    container: (u16, u16),
    insets: (u8, u8, u8, u8),
    header: (u8, u8),
    tabs: Vec<(u16, u16)>,
    last_ghost: Option<(u8, u8)>,
    stretch: bool,
}

fuzz_target!(|input: PassInput| {
    let orientation = Orientation::ALL[usize::from(input.placement) % 4];
    let strategy = Strategy::from(orientation);

    let (t, r, b, l) = input.insets;
    let mut inputs = LayoutInputs::new(
        Size::new(i32::from(input.container.0), i32::from(input.container.1)),
        Insets::new(i32::from(t), i32::from(r), i32::from(b), i32::from(l)),
        Size::new(i32::from(input.header.0), i32::from(input.header.1)),
    );
    if let Some((w, h)) = input.last_ghost {
        inputs = inputs.with_last_ghost(Size::new(i32::from(w), i32::from(h)));
    }
    let tabs: Vec<Size> = input
        .tabs
        .iter()
        .take(256)
        .map(|&(w, h)| Size::new(i32::from(w), i32::from(h)))
        .collect();

    let pass = SingleRowLayout::new()
        .stretch(input.stretch)
        .layout(&strategy, &inputs, &tabs);

    // Post-conditions that must always hold:
    assert_eq!(pass.tabs.len() + pass.hidden.len(), tabs.len(), "tab lost");
    assert_eq!(pass.more_rect.is_some(), pass.overflowed(), "indicator mismatch");
    let right_inset = i32::from(orientation == Orientation::Right);
    let thickness = strategy.fixed_axis_length(&inputs) - right_inset;
    for slot in &pass.tabs {
        let fixed = if orientation.is_horizontal() {
            slot.rect.height
        } else {
            slot.rect.width
        };
        assert_eq!(fixed, thickness, "strip thickness varies");
    }
    let again = SingleRowLayout::new()
        .stretch(input.stretch)
        .layout(&strategy, &inputs, &tabs);
    assert_eq!(pass, again);
});
