#[cfg(test)]
mod verify {
    use portions::language::{update, ConversionMode, Event, Settings};
    use portions::scaling::{convert, convert_checked, rescale_line};

    #[test]
    fn lines_without_quantities_pass_through() {
        for ratio in [0.5, 1.0, 2.0, 10.0] {
            assert_eq!(rescale_line("Ingredients:", ratio), "Ingredients:");
            assert_eq!(rescale_line("", ratio), "");
            assert_eq!(rescale_line("Whisk until fluffy.", ratio), "Whisk until fluffy.");

            // bulleted lines start with a dash, not a number
            assert_eq!(rescale_line("- 2 cups flour", ratio), "- 2 cups flour");
        }

        // pass-through still trims
        assert_eq!(rescale_line("  Ingredients:  ", 2.0), "Ingredients:");
    }

    #[test]
    fn unlisted_units_round_to_hundredths() {
        assert_eq!(rescale_line("1.5 cup flour", 2.0), "3 cup flour");
        assert_eq!(rescale_line("1/3 cup oil", 2.0), "0.67 cup oil");
        assert_eq!(rescale_line("0.1 cups milk", 3.0), "0.3 cups milk");
        assert_eq!(rescale_line("3 eggs", 1.5), "4.5 eggs");
    }

    #[test]
    fn grams_and_milliliters_round_to_whole_numbers() {
        assert_eq!(rescale_line("250g flour", 1.5), "375g flour");
        assert_eq!(rescale_line("125 g butter", 0.33), "41 g butter");
        assert_eq!(rescale_line("100 ml cream", 0.33), "33 ml cream");

        // "grams" is not the token "g", so it gets the decimal policy
        assert_eq!(rescale_line("125 grams butter", 0.33), "41.25 grams butter");
    }

    #[test]
    fn intervals_scale_both_ends() {
        assert_eq!(rescale_line("1 - 2 cups water", 2.0), "2 - 4 cups water");
        assert_eq!(rescale_line("100 - 150 g sugar", 2.0), "200 - 300 g sugar");

        // reassembly always writes single spaces around the dash
        assert_eq!(rescale_line("10-12 minutes", 1.0), "10 - 12 minutes");
    }

    #[test]
    fn abandoned_intervals_keep_their_dash() {
        assert_eq!(rescale_line("1 -piece lemon", 2.0), "2 -piece lemon");
    }

    #[test]
    fn portions_and_multiplier_modes_agree() {
        let text = "250g flour\n1/2 l milk\n2 eggs\nPinch of salt";

        let halving = ConversionMode::Portions {
            orig_portions: 4.0,
            new_portions: 8.0,
        };
        let doubling = ConversionMode::Multiplier { factor: 2.0 };

        assert_eq!(halving.ratio(), doubling.ratio());
        assert_eq!(
            convert(text, halving.ratio()),
            convert(text, doubling.ratio())
        );
    }

    #[test]
    fn settings_gate_conversion() {
        let settings = update(Settings::default(), Event::SelectPortions);
        let settings = update(settings, Event::SetOrigPortions(0.0));
        let settings = update(settings, Event::SetNewPortions(5.0));
        assert!(!settings.is_valid());

        let settings = update(settings, Event::SetOrigPortions(4.0));
        let settings = update(settings, Event::SetNewPortions(8.0));
        assert!(settings.is_valid());
        assert_eq!(
            settings
                .mode()
                .ratio(),
            2.0
        );
    }

    #[test]
    fn invalid_ratios_never_touch_the_text() {
        let text = "250g flour\n2 eggs";

        assert_eq!(convert_checked(text, 0.0), None);
        assert_eq!(convert_checked(text, f64::NAN), None);
        assert_eq!(convert_checked(text, -1.0), None);
    }

    #[test]
    fn integer_gram_values_are_stable_at_ratio_one() {
        let text = "250g flour\n5g salt\n120 ml milk\n\nMix well.";

        assert_eq!(convert(text, 1.0), text);
    }

    #[test]
    fn conversion_is_deterministic() {
        let text = "4 cups water\n1 - 2 tsp honey";

        assert_eq!(convert(text, 2.0), convert(text, 2.0));
    }

    #[test]
    fn converted_output_can_be_converted_again() {
        // there is no memory of original values, so scaling by 2 and then
        // by 0.5 walks the numbers back
        let text = "4 cups water\n300g rice";

        let doubled = convert(text, 2.0);
        assert_eq!(doubled, "8 cups water\n600g rice");
        assert_eq!(convert(&doubled, 0.5), text);
    }

    #[test]
    fn trailing_newlines_survive() {
        assert_eq!(convert("2 eggs\n", 2.0), "4 eggs\n");
    }

    #[test]
    fn nonfinite_amounts_pass_into_the_output() {
        assert_eq!(rescale_line("1/0 l stock", 2.0), "Infinity l stock");

        // 0/0 parses to NaN, which reads as "no quantity here"
        assert_eq!(rescale_line("0/0 cups broth", 2.0), "0/0 cups broth");
    }
}
