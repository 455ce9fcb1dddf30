//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// `1234.567` with 2 decimals becomes `"1 234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    // Пробел каждые 3 цифры с конца целой части
    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Цена в колонке списка товаров: `"$ 1 234.50"`
pub fn format_price(value: f64) -> String {
    format!("$ {}", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1 234 567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.5), "$ 120.50");
        assert_eq!(format_price(0.0), "$ 0.00");
        assert_eq!(format_price(1234567.891), "$ 1 234 567.89");
    }
}
