//! # Brazilian Document Number Validation
//!
//! Check-digit validation for CPF (11-digit natural-person registry),
//! CNPJ (14-digit legal-entity registry), and CEP (8-digit postal code).
//!
//! These functions are pure and total: malformed input of any shape —
//! empty strings, punctuation-only strings, wrong lengths, non-numeric
//! characters — reduces to `false`. They never panic and never mutate
//! their input.
//!
//! ## Invariant
//!
//! Both CPF and CNPJ validation reject sequences where all digits are
//! identical (`111.111.111-11`, `00.000.000/0000-00`, ...) even though
//! the mod-11 arithmetic can accidentally hold for them. This matches
//! the registry rules: such numbers are never issued.
//!
//! Input is normalized by stripping every non-digit character before
//! validation, so both punctuated (`529.982.247-25`) and bare
//! (`52998224725`) forms are accepted.

/// Extract the decimal digits of `input`, ignoring everything else.
fn digits_of(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Weighted mod-11 check digit used by the CPF algorithm.
///
/// Weights descend from `first_weight` down to 2, aligned with the
/// digits in order. The registry rule maps a remainder of 10 to 0.
fn cpf_check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(d, w)| d * w)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

/// Weighted mod-11 check digit used by the CNPJ algorithm.
///
/// Digits are consumed from the last position backwards with the weight
/// cycling 2, 3, ..., 9, 2, 3, ... A remainder below 2 yields check
/// digit 0; otherwise the check digit is `11 - remainder`.
fn cnpj_check_digit(digits: &[u32]) -> u32 {
    let mut weight = 2;
    let mut sum = 0;
    for &d in digits.iter().rev() {
        sum += d * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Returns `true` when `input` is a structurally valid CPF.
///
/// Accepts punctuated or bare forms; all non-digit characters are
/// stripped first. Validation requires exactly 11 digits, a non-trivial
/// digit sequence, and both check digits to match the weighted mod-11
/// computation.
///
/// ```
/// use viu_core::document::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("529.982.247-26"));
/// assert!(!is_valid_cpf("111.111.111-11"));
/// assert!(!is_valid_cpf(""));
/// ```
pub fn is_valid_cpf(input: &str) -> bool {
    let digits = digits_of(input);

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    cpf_check_digit(&digits[..9], 10) == digits[9]
        && cpf_check_digit(&digits[..10], 11) == digits[10]
}

/// Returns `true` when `input` is a structurally valid CNPJ.
///
/// Accepts punctuated or bare forms; all non-digit characters are
/// stripped first. Validation requires exactly 14 digits, a non-trivial
/// digit sequence, and both check digits to match the cyclic-weight
/// mod-11 computation.
///
/// ```
/// use viu_core::document::is_valid_cnpj;
///
/// assert!(is_valid_cnpj("11.222.333/0001-81"));
/// assert!(!is_valid_cnpj("11.222.333/0001-80"));
/// assert!(!is_valid_cnpj("00.000.000/0000-00"));
/// ```
pub fn is_valid_cnpj(input: &str) -> bool {
    let digits = digits_of(input);

    if digits.len() != 14 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    cnpj_check_digit(&digits[..12]) == digits[12]
        && cnpj_check_digit(&digits[..13]) == digits[13]
}

/// Returns `true` when `input` is a structurally valid CEP
/// (Brazilian postal code): exactly 8 digits after stripping
/// punctuation. CEPs carry no check digit.
pub fn is_valid_cep(input: &str) -> bool {
    digits_of(input).len() == 8
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference numbers generated with the registry algorithm; none
    // belong to a real person or company.
    const VALID_CPFS: &[&str] = &[
        "529.982.247-25",
        "52998224725",
        "111.444.777-35",
        "935.411.347-80",
    ];

    const VALID_CNPJS: &[&str] = &["11.222.333/0001-81", "11222333000181", "11.444.777/0001-61"];

    #[test]
    fn accepts_known_valid_cpfs() {
        for cpf in VALID_CPFS {
            assert!(is_valid_cpf(cpf), "expected valid: {cpf}");
        }
    }

    #[test]
    fn accepts_known_valid_cnpjs() {
        for cnpj in VALID_CNPJS {
            assert!(is_valid_cnpj(cnpj), "expected valid: {cnpj}");
        }
    }

    #[test]
    fn rejects_corrupted_check_digits() {
        assert!(!is_valid_cpf("529.982.247-24"));
        assert!(!is_valid_cpf("529.982.247-26"));
        assert!(!is_valid_cpf("111.444.777-34"));
        assert!(!is_valid_cnpj("11.222.333/0001-80"));
        assert!(!is_valid_cnpj("11.222.333/0001-82"));
    }

    #[test]
    fn rejects_repeated_digit_sequences() {
        for d in 0..=9 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            let cnpj: String = std::iter::repeat(char::from(b'0' + d)).take(14).collect();
            assert!(!is_valid_cpf(&cpf), "expected invalid: {cpf}");
            assert!(!is_valid_cnpj(&cnpj), "expected invalid: {cnpj}");
        }
    }

    #[test]
    fn rejects_malformed_input_without_panicking() {
        for input in ["", "abc", "123", "...", "---", "   ", "5299822472", "529982247255"] {
            assert!(!is_valid_cpf(input), "expected invalid CPF: {input:?}");
            assert!(!is_valid_cnpj(input), "expected invalid CNPJ: {input:?}");
        }
    }

    #[test]
    fn punctuation_is_irrelevant() {
        assert_eq!(is_valid_cpf("529.982.247-25"), is_valid_cpf("52998224725"));
        assert_eq!(
            is_valid_cnpj("11.222.333/0001-81"),
            is_valid_cnpj("11222333000181")
        );
        // Arbitrary punctuation placement works too.
        assert!(is_valid_cpf("5-2-9-9-8-2-2-4-7-2-5"));
    }

    #[test]
    fn cep_checks_digit_count_only() {
        assert!(is_valid_cep("01310-100"));
        assert!(is_valid_cep("01310100"));
        assert!(!is_valid_cep("0131010"));
        assert!(!is_valid_cep("013101000"));
        assert!(!is_valid_cep(""));
        assert!(!is_valid_cep("abcdefgh"));
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        /// Append the two CPF check digits to a 9-digit prefix.
        fn complete_cpf(prefix: &[u32]) -> Vec<u32> {
            let mut digits = prefix.to_vec();
            digits.push(cpf_check_digit(&digits[..9], 10));
            digits.push(cpf_check_digit(&digits[..10], 11));
            digits
        }

        /// Append the two CNPJ check digits to a 12-digit prefix.
        fn complete_cnpj(prefix: &[u32]) -> Vec<u32> {
            let mut digits = prefix.to_vec();
            digits.push(cnpj_check_digit(&digits[..12]));
            digits.push(cnpj_check_digit(&digits[..13]));
            digits
        }

        fn to_string(digits: &[u32]) -> String {
            digits.iter().map(|d| d.to_string()).collect()
        }

        proptest! {
            #[test]
            fn generated_cpfs_validate(prefix in proptest::collection::vec(0u32..10, 9)) {
                prop_assume!(!prefix.iter().all(|&d| d == prefix[0]));
                let cpf = complete_cpf(&prefix);
                prop_assert!(is_valid_cpf(&to_string(&cpf)));
            }

            #[test]
            fn corrupting_final_cpf_check_digit_invalidates(
                prefix in proptest::collection::vec(0u32..10, 9),
                bump in 1u32..10,
            ) {
                prop_assume!(!prefix.iter().all(|&d| d == prefix[0]));
                let mut cpf = complete_cpf(&prefix);
                cpf[10] = (cpf[10] + bump) % 10;
                prop_assert!(!is_valid_cpf(&to_string(&cpf)));
            }

            #[test]
            fn generated_cnpjs_validate(prefix in proptest::collection::vec(0u32..10, 12)) {
                prop_assume!(!prefix.iter().all(|&d| d == prefix[0]));
                let cnpj = complete_cnpj(&prefix);
                prop_assert!(is_valid_cnpj(&to_string(&cnpj)));
            }

            #[test]
            fn corrupting_final_cnpj_check_digit_invalidates(
                prefix in proptest::collection::vec(0u32..10, 12),
                bump in 1u32..10,
            ) {
                prop_assume!(!prefix.iter().all(|&d| d == prefix[0]));
                let mut cnpj = complete_cnpj(&prefix);
                cnpj[13] = (cnpj[13] + bump) % 10;
                prop_assert!(!is_valid_cnpj(&to_string(&cnpj)));
            }
        }
    }
}
