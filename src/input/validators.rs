use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

pub fn max_length(max: usize) -> Validator {
    Box::new(move |value: &str| {
        if value.chars().count() > max {
            Err(format!("Maximum length is {}", max))
        } else {
            Ok(())
        }
    })
}

/// Accepts a strictly positive base-10 i64 (identifiers).
pub fn positive_int() -> Validator {
    Box::new(|value: &str| match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err("Enter a positive number".to_string()),
    })
}

/// Accepts exactly `true` or `false`, case-sensitive.
pub fn bool_literal() -> Validator {
    Box::new(|value: &str| {
        if value == "true" || value == "false" {
            Ok(())
        } else {
            Err("Enter true or false".to_string())
        }
    })
}

pub fn email() -> Validator {
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid");
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err("Enter a valid email address".to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_int_rejects_zero_and_garbage() {
        let v = positive_int();
        assert!(v("42").is_ok());
        assert!(v(" 7 ").is_ok());
        assert!(v("0").is_err());
        assert!(v("-3").is_err());
        assert!(v("abc").is_err());
        assert!(v("").is_err());
    }

    #[test]
    fn bool_literal_is_case_sensitive() {
        let v = bool_literal();
        assert!(v("true").is_ok());
        assert!(v("false").is_ok());
        assert!(v("True").is_err());
        assert!(v("yes").is_err());
    }

    #[test]
    fn email_accepts_plausible_addresses() {
        let v = email();
        assert!(v("dev@example.test").is_ok());
        assert!(v("not-an-email").is_err());
    }
}
