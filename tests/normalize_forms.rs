use eqstep::core::linear::LinearForm;
use eqstep::core::normalizer::{collapse_signs, normalize};

#[test]
fn normalize_is_idempotent() {
    let samples = [
        " 2,5 x + 3 = 7 ",
        "2х − 4 = 0",
        "3 × x ÷ 2 = 1",
        "ｘ＋１＝２", // full-width, folded by NFKC
        "--x = +-3",
        "x\u{a8}=1", // spacing diaeresis: NFKC yields a space plus a combining mark
        "2 \u{301}x = 4",
    ];
    for raw in samples {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "{raw:?}");
        assert!(!once.chars().any(char::is_whitespace));
        assert!(!once.contains(','));
    }
}

#[test]
fn full_width_input_becomes_ascii() {
    assert_eq!(normalize("ｘ＋１＝２"), "x+1=2");
    assert_eq!(normalize("3 × x ÷ 2 = 1"), "3*x/2=1");
}

#[test]
fn sign_runs_collapse() {
    assert_eq!(collapse_signs("7---2"), "7-2");
    assert_eq!(collapse_signs("x+-+-1"), "x+1");
    assert_eq!(collapse_signs("2x-3"), "2x-3");
}

#[test]
fn rendered_forms_decompose_back() {
    let forms = [
        LinearForm::new(3.0, 2.0),
        LinearForm::new(-1.0, -4.5),
        LinearForm::new(0.125, 0.0),
        LinearForm::new(1.0 / 3.0, -7.0),
        LinearForm::new(-12.0, 0.1),
    ];
    for form in forms {
        let text = form.render('x');
        assert_eq!(LinearForm::parse(&text, 'x').unwrap(), form, "{text}");
    }
}

#[test]
fn form_evaluates_at_a_point() {
    assert_eq!(LinearForm::new(2.0, 3.0).at(2.0), 7.0);
}
