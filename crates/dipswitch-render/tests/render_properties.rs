//! Property tests for the switch bank renderer.
//!
//! Every address representable at the supported widths must render one slot
//! per bit, with slot `i` ON exactly when bit `i - 1` is set, and the pixels
//! must decode back to the same address.

use dipswitch_render::{SwitchBank, SwitchPosition, layout::Layout, render};
use proptest::prelude::*;

const WIDTHS: [usize; 4] = [6, 8, 10, 12];

fn width_and_value() -> impl Strategy<Value = (usize, u64)> {
    prop::sample::select(WIDTHS.to_vec())
        .prop_flat_map(|width| (Just(width), 0..(1u64 << width)))
}

proptest! {
    #[test]
    fn slots_follow_bits((width, value) in width_and_value()) {
        let bank = SwitchBank::from_address(value, width).unwrap();
        let image = render(&bank);
        let positions = image.positions();

        prop_assert_eq!(positions.len(), width);
        for (index, position) in positions.iter().enumerate() {
            let bit = (value >> index) & 1 == 1;
            prop_assert_eq!(position.is_on(), bit, "slot {} of {:#b}", index + 1, value);
        }

        let size = Layout::for_bank(&bank).canvas_size();
        prop_assert_eq!((image.width(), image.height()), (size.width, size.height));
    }

    #[test]
    fn pixels_decode_to_address((width, value) in width_and_value()) {
        let bank = SwitchBank::from_address(value, width).unwrap();
        let decoded = render(&bank).to_bank().unwrap();

        prop_assert_eq!(&decoded, &bank);
        prop_assert_eq!(decoded.value(), value);
    }

    #[test]
    fn arbitrary_bit_strings_round_trip(bits in "[01]{1,16}") {
        let bank: SwitchBank = bits.parse().unwrap();
        prop_assert_eq!(render(&bank).to_bank().unwrap().to_string(), bits);
    }
}

#[test]
fn zero_is_all_off() {
    for width in WIDTHS {
        let image = render(&SwitchBank::from_address(0, width).unwrap());
        assert!(image.positions().iter().all(|p| *p == SwitchPosition::Off));
    }
}

#[test]
fn max_is_all_on() {
    for width in WIDTHS {
        let max = (1u64 << width) - 1;
        let image = render(&SwitchBank::from_address(max, width).unwrap());
        assert_eq!(image.positions().len(), width);
        assert!(image.positions().iter().all(|p| p.is_on()));
    }
}
