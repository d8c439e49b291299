use jsonlex_test_bench::assert_eq_tokens;
use jsonlex_test_bench::consts::*;

#[test]
fn literal_bool() {
    assert_eq_tokens(TRUE1_INPUT, TRUE_TOKENS);
    assert_eq_tokens(TRUE2_INPUT, TRUE_TOKENS);
    assert_eq_tokens(TRUE3_INPUT, TRUE_TOKENS);
    assert_eq_tokens(FALSE1_INPUT, FALSE_TOKENS);
    assert_eq_tokens(FALSE2_INPUT, FALSE_TOKENS);
}

#[test]
fn literal_null() {
    assert_eq_tokens(NULL1_INPUT, NULL_TOKENS);
    assert_eq_tokens(NULL2_INPUT, NULL_TOKENS);
    assert_eq_tokens(NULL3_INPUT, NULL_TOKENS);
}

#[test]
fn literal_near_miss() {
    assert_eq_tokens(NEAR_LITERAL_INPUT, NEAR_LITERAL_TOKENS);
}

#[test]
fn numeric_runs() {
    assert_eq_tokens(NUMBERS_INPUT, NUMBERS_TOKENS);
    assert_eq_tokens(LOOSE_NUMERIC_INPUT, LOOSE_NUMERIC_TOKENS);
}
