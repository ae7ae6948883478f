//! Reading and writing the `t` (whole seconds) query parameter of a page URL.

use url::Url;

pub const TIME_PARAM: &str = "t";

/// Longest leading decimal number in `raw`, read the way browsers read a loose
/// number: `"10s"` is 10, `"abc"` is nothing.
fn leading_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Time in seconds from the first `t` parameter of `href`, if it starts with a finite number.
pub fn read_time_param(href: &str) -> Option<f64> {
    let url = Url::parse(href).ok()?;
    let (_, value) = url.query_pairs().find(|(key, _)| key == TIME_PARAM)?;
    leading_number(&value).filter(|seconds| seconds.is_finite())
}

/// `href` with `t` set to `seconds`.
///
/// The first `t` is replaced in place and later ones dropped; other parameters and the
/// fragment are kept. An `href` that does not parse as a URL is returned unchanged.
pub fn with_time_param(href: &str, seconds: u64) -> String {
    let Ok(mut url) = Url::parse(href) else {
        return href.to_string();
    };
    let value = seconds.to_string();

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, current) in url.query_pairs() {
        if key != TIME_PARAM {
            pairs.push((key.into_owned(), current.into_owned()));
        } else if !replaced {
            pairs.push((TIME_PARAM.to_string(), value.clone()));
            replaced = true;
        }
    }
    if !replaced {
        pairs.push((TIME_PARAM.to_string(), value));
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
    url.into()
}
