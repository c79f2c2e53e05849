// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware number, currency and date formatting.
//!
//! Arabic output uses Arabic-Indic digits with the Arabic thousands (`٬`) and
//! decimal (`٫`) separators. Dates stay on the Gregorian calendar.

use aqlhr_locale_core::Lang;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const ARABIC_MONTHS: [&str; 12] = [
	"يناير",
	"فبراير",
	"مارس",
	"أبريل",
	"مايو",
	"يونيو",
	"يوليو",
	"أغسطس",
	"سبتمبر",
	"أكتوبر",
	"نوفمبر",
	"ديسمبر",
];

struct Symbols {
	group: char,
	decimal: char,
}

fn symbols(lang: Lang) -> Symbols {
	match lang {
		Lang::En => Symbols {
			group: ',',
			decimal: '.',
		},
		Lang::Ar => Symbols {
			group: '\u{066C}',
			decimal: '\u{066B}',
		},
	}
}

/// Map ASCII digits to the digit set of `lang`.
pub fn localize_digits(text: &str, lang: Lang) -> String {
	match lang {
		Lang::En => text.to_string(),
		Lang::Ar => text
			.chars()
			.map(|c| match c.to_digit(10) {
				Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
				_ => c,
			})
			.collect(),
	}
}

fn group_thousands(digits: &str, separator: char) -> String {
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(separator);
		}
		out.push(c);
	}
	out
}

fn format_fixed(value: f64, lang: Lang, keep_zeros: bool) -> String {
	if !value.is_finite() {
		return value.to_string();
	}

	let rendered = format!("{value:.2}");
	let (negative, rendered) = match rendered.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, rendered.as_str()),
	};
	let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered, ""));
	let fraction = if keep_zeros {
		fraction
	} else {
		fraction.trim_end_matches('0')
	};

	let symbols = symbols(lang);
	let mut out = String::new();
	let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
	if negative && !is_zero {
		out.push('-');
	}
	out.push_str(&group_thousands(integer, symbols.group));
	if !fraction.is_empty() {
		out.push(symbols.decimal);
		out.push_str(fraction);
	}
	localize_digits(&out, lang)
}

/// Grouped number with at most two fraction digits.
pub fn format_number(value: f64, lang: Lang) -> String {
	format_fixed(value, lang, false)
}

/// Saudi riyal amount with exactly two fraction digits.
pub fn format_currency(amount: f64, lang: Lang) -> String {
	let number = format_fixed(amount, lang, true);
	match lang {
		Lang::En => format!("SAR {number}"),
		Lang::Ar => format!("{number} ر.س"),
	}
}

/// Short numeric date: `M/D/YYYY` in English, `D/M/YYYY` in Arabic.
pub fn format_date(date: NaiveDate, lang: Lang) -> String {
	match lang {
		Lang::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
		Lang::Ar => localize_digits(
			&format!("{}/{}/{}", date.day(), date.month(), date.year()),
			lang,
		),
	}
}

/// Long date with a 12-hour clock.
pub fn format_datetime(datetime: NaiveDateTime, lang: Lang) -> String {
	match lang {
		Lang::En => datetime.format("%B %-d, %Y at %I:%M %p").to_string(),
		Lang::Ar => {
			let (pm, hour) = datetime.hour12();
			let month = ARABIC_MONTHS[datetime.month0() as usize];
			let meridiem = if pm { "م" } else { "ص" };
			let text = format!(
				"{} {} {} في {:02}:{:02} {}",
				datetime.day(),
				month,
				datetime.year(),
				hour,
				datetime.minute(),
				meridiem
			);
			localize_digits(&text, lang)
		}
	}
}
