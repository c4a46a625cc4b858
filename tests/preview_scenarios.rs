use monogram_tshirt::constants::NAME_MAX_CHARS;
use monogram_tshirt::{build_preview_url, FormState, PreviewConfig, ShirtColor};
use pretty_assertions::assert_eq;

#[test]
fn alex_seven_red() {
    let mut form = FormState::default();
    form.set_name("Alex");
    form.set_number("7");
    form.set_color(ShirtColor::Red);

    let url = form.preview_url(&PreviewConfig::default());
    assert!(url.contains("/e_gen_recolor:prompt_shirt;to-color_red/"));
    assert!(url.contains("l_text:Arial_60_bold:7,co_black"));
    assert!(url.contains("l_text:Arial_40_bold_center:Alex,w_180,co_black"));
    assert!(!url.contains("co_white"));
}

#[test]
fn empty_name_blue() {
    let mut form = FormState::default();
    form.set_name("");
    form.set_number("10");

    assert_eq!(form.preview_url(&PreviewConfig::default()), "");
    assert_eq!(form.errors().name_message(), "Name cannot be empty.");
    assert_eq!(form.errors().number_message(), "");
}

#[test]
fn every_color_embeds_inputs_and_text_color() {
    let config = PreviewConfig::default();
    for color in ShirtColor::ALL {
        let url = build_preview_url(&config, "Sam Lee", "23", color);
        let text_color = if matches!(color, ShirtColor::Black | ShirtColor::Maroon) {
            "white"
        } else {
            "black"
        };

        assert!(url.contains(":Sam Lee,"), "{url}");
        assert!(url.contains(":23,"), "{url}");
        assert_eq!(url.matches(&format!("co_{text_color}")).count(), 2, "{url}");

        let recolor = format!("to-color_{}", color.token());
        assert_eq!(url.contains(&recolor), color != ShirtColor::Blue, "{url}");
        assert_eq!(url.contains("e_gen_recolor"), color != ShirtColor::Blue, "{url}");
    }
}

#[test]
fn blank_number_suppresses_preview_for_any_color() {
    let config = PreviewConfig::default();
    for color in ShirtColor::ALL {
        assert_eq!(build_preview_url(&config, "Kim", " \t ", color), "");
    }
}

#[test]
fn long_name_is_cut_to_limit() {
    let mut form = FormState::default();
    let long = "Bartholomew Montgomery-Fitzgerald the Third";
    assert!(long.chars().count() > NAME_MAX_CHARS);

    form.set_name(long);
    assert_eq!(form.name(), &long[..NAME_MAX_CHARS]);
    assert!(form.preview_url(&PreviewConfig::default()).contains(form.name()));
}
