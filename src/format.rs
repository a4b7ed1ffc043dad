//! Rendering amounts to display text, and reading display text back.
//!
//! Templates follow the composite format syntax desktop platforms use for
//! numeric bindings: `"{0:C}"`, `"Total: {0:N2}"`, `"{0,12:F2}"`, or a bare
//! specifier such as `"C0"` or `"#,##0.00;(#,##0.00);-"`.
//!
//! Standard specifiers (case-insensitive, optional precision `0..=28`):
//!
//! - `C` currency, locale symbol and patterns
//! - `N` grouped number
//! - `F` fixed-point
//! - `P` percent, value times 100
//! - `G` general, same digits as `F2`
//!
//! Anything else is a custom format built from `0`, `#`, `.`, `,`, `%`,
//! quoted or escaped literals, and up to three `;`-separated sections
//! (positive, negative, zero).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::locale::NumberFormat;
use crate::money::Money;

const MAX_PRECISION: u8 = 28;

/// Scale of a [`Money`] amount, in decimal places.
const MONEY_SCALE: u32 = 2;

/// Alignments at or above this width are format errors.
const MAX_ALIGNMENT: u32 = 1_000_000;

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Value { align: Option<i32>, spec: Spec },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Spec {
    Standard {
        kind: Standard,
        precision: Option<u8>,
    },
    Custom(Vec<Section>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Standard {
    Currency,
    Number,
    Fixed,
    Percent,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    tokens: Vec<Token>,
    number: Option<NumberPattern>,
    percent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Number,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberPattern {
    int_min: usize,
    frac_min: usize,
    frac_max: usize,
    grouping: bool,
}

impl Default for FormatTemplate {
    /// Currency with the locale's default number of decimals, `"{0:C}"`.
    fn default() -> Self {
        Self {
            source: "{0:C}".to_string(),
            pieces: vec![Piece::Value {
                align: None,
                spec: Spec::Standard {
                    kind: Standard::Currency,
                    precision: None,
                },
            }],
        }
    }
}

impl FromStr for FormatTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FormatTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let pieces = if source.contains(['{', '}']) {
            parse_composite(source)?
        } else {
            vec![Piece::Value {
                align: None,
                spec: parse_spec(source, source)?,
            }]
        };
        Ok(Self {
            source: source.to_string(),
            pieces,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn value_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Value { .. }))
            .count()
    }
}

fn parse_composite(source: &str) -> Result<Vec<Piece>> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut item = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    item.push(c);
                }
                if !closed {
                    return Err(Error::invalid_format(source, "unclosed '{'"));
                }
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(parse_item(source, &item)?);
            }
            '}' => return Err(Error::invalid_format(source, "unmatched '}'")),
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    Ok(pieces)
}

/// One `{index[,alignment][:spec]}` item, braces already stripped.
fn parse_item(source: &str, item: &str) -> Result<Piece> {
    let (head, spec) = match item.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (item, None),
    };
    let (index, align) = match head.split_once(',') {
        Some((index, align)) => {
            let align = align
                .trim()
                .parse::<i32>()
                .map_err(|_| Error::invalid_format(source, "alignment must be an integer"))?;
            if align.unsigned_abs() >= MAX_ALIGNMENT {
                return Err(Error::invalid_format(source, "alignment is too large"));
            }
            (index, Some(align))
        }
        None => (head, None),
    };
    if index.trim() != "0" {
        return Err(Error::invalid_format(
            source,
            "only argument index 0 is available",
        ));
    }
    let spec = match spec {
        Some(spec) => parse_spec(source, spec)?,
        None => Spec::Standard {
            kind: Standard::General,
            precision: None,
        },
    };
    Ok(Piece::Value { align, spec })
}

fn parse_spec(source: &str, spec: &str) -> Result<Spec> {
    let mut chars = spec.chars();
    let Some(letter) = chars.next() else {
        return Ok(Spec::Standard {
            kind: Standard::General,
            precision: None,
        });
    };
    let digits = chars.as_str();
    let is_standard = letter.is_ascii_alphabetic()
        && digits.len() <= 2
        && digits.chars().all(|c| c.is_ascii_digit());
    if !is_standard {
        return parse_custom(source, spec).map(Spec::Custom);
    }

    let precision = if digits.is_empty() {
        None
    } else {
        let p: u8 = digits
            .parse()
            .map_err(|_| Error::invalid_format(source, "bad precision"))?;
        if p > MAX_PRECISION {
            return Err(Error::invalid_format(
                source,
                format!("precision {p} exceeds {MAX_PRECISION}"),
            ));
        }
        Some(p)
    };
    let kind = match letter.to_ascii_uppercase() {
        'C' => Standard::Currency,
        'N' => Standard::Number,
        'F' => Standard::Fixed,
        'P' => Standard::Percent,
        'G' if precision.is_none() => Standard::General,
        'G' => {
            return Err(Error::invalid_format(
                source,
                "significant-digit precision is not supported for G",
            ));
        }
        'D' | 'X' => {
            return Err(Error::invalid_format(
                source,
                format!("'{letter}' only applies to integers"),
            ));
        }
        other => {
            return Err(Error::invalid_format(
                source,
                format!("unknown standard specifier '{other}'"),
            ));
        }
    };
    Ok(Spec::Standard { kind, precision })
}

fn parse_custom(source: &str, spec: &str) -> Result<Vec<Section>> {
    let sections = split_sections(source, spec)?;
    if sections.len() > 3 {
        return Err(Error::invalid_format(source, "more than three sections"));
    }
    sections
        .iter()
        .map(|s| parse_section(source, s))
        .collect()
}

/// Split on `;` outside quotes and escapes.
fn split_sections(source: &str, spec: &str) -> Result<Vec<String>> {
    let mut sections = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, ';') => sections.push(std::mem::take(&mut current)),
            (None, '\\') => {
                current.push(c);
                match chars.next() {
                    Some(n) => current.push(n),
                    None => return Err(Error::invalid_format(source, "trailing '\\'")),
                }
            }
            (None, '\'' | '"') => {
                quote = Some(c);
                current.push(c);
            }
            (Some(q), _) if c == q => {
                quote = None;
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    if quote.is_some() {
        return Err(Error::invalid_format(source, "unterminated quote"));
    }
    sections.push(current);
    Ok(sections)
}

fn parse_section(source: &str, section: &str) -> Result<Section> {
    let chars: Vec<char> = section.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut number = None;
    let mut percent = false;
    let mut i = 0;

    let flush = |literal: &mut String, tokens: &mut Vec<Token>| {
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(literal)));
        }
    };

    while i < chars.len() {
        let c = chars[i];
        let starts_run = matches!(c, '0' | '#')
            || (c == '.' && matches!(chars.get(i + 1), Some('0' | '#')));
        if starts_run {
            if number.is_some() {
                return Err(Error::invalid_format(
                    source,
                    "only one digit placeholder group per section",
                ));
            }
            let start = i;
            while i < chars.len() && matches!(chars[i], '0' | '#' | '.' | ',') {
                i += 1;
            }
            let run: String = chars[start..i].iter().collect();
            flush(&mut literal, &mut tokens);
            tokens.push(Token::Number);
            number = Some(NumberPattern::parse(&run));
            continue;
        }
        match c {
            '\\' => {
                i += 1;
                if let Some(&n) = chars.get(i) {
                    literal.push(n);
                }
            }
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    literal.push(chars[i]);
                    i += 1;
                }
            }
            '%' => {
                flush(&mut literal, &mut tokens);
                tokens.push(Token::Percent);
                percent = true;
            }
            _ => literal.push(c),
        }
        i += 1;
    }
    flush(&mut literal, &mut tokens);
    Ok(Section {
        tokens,
        number,
        percent,
    })
}

impl NumberPattern {
    fn parse(run: &str) -> Self {
        let (int, frac) = run.split_once('.').unwrap_or((run, ""));
        let int_placeholders: Vec<char> = int.chars().filter(|c| matches!(c, '0' | '#')).collect();
        let int_min = int_placeholders
            .iter()
            .position(|&c| c == '0')
            .map_or(0, |first| int_placeholders.len() - first);

        // A ',' only groups when a digit placeholder follows it.
        let grouping = int
            .find(',')
            .is_some_and(|comma| int[comma..].contains(['0', '#']));

        let frac_placeholders: Vec<char> =
            frac.chars().filter(|c| matches!(c, '0' | '#')).collect();
        let frac_min = frac_placeholders
            .iter()
            .rposition(|&c| c == '0')
            .map_or(0, |last| last + 1);

        Self {
            int_min,
            frac_min,
            frac_max: frac_placeholders.len(),
            grouping,
        }
    }
}

/// An absolute amount as an integer count of `10^-scale` units.
#[derive(Debug, Clone, Copy)]
struct Magnitude {
    units: u128,
    scale: u32,
}

impl Magnitude {
    fn of(value: Money, percent: bool) -> Self {
        let units = u128::from(value.cents().unsigned_abs());
        // Percent multiplies by 100, which turns cents into whole units.
        let scale = if percent { 0 } else { MONEY_SCALE };
        Self { units, scale }
    }

    /// Round half away from zero to `frac` decimals and return the integer
    /// part and exactly `frac` fractional digits.
    fn digits(self, frac: usize) -> (u128, String) {
        let scale = self.scale as usize;
        let (int, rem, width) = if frac >= scale {
            let div = 10u128.pow(self.scale);
            (self.units / div, self.units % div, scale)
        } else {
            let drop = 10u128.pow((scale - frac) as u32);
            let mut q = self.units / drop;
            if (self.units % drop) * 2 >= drop {
                q += 1;
            }
            let keep = 10u128.pow(frac as u32);
            (q / keep, q % keep, frac)
        };
        let mut frac_digits = if width == 0 {
            String::new()
        } else {
            format!("{rem:0width$}")
        };
        while frac_digits.len() < frac {
            frac_digits.push('0');
        }
        (int, frac_digits)
    }
}

fn group(int: &str, nf: &NumberFormat) -> String {
    if nf.group_size == 0 || int.len() <= nf.group_size {
        return int.to_string();
    }
    let mut out = String::with_capacity(int.len() + int.len() / nf.group_size);
    let lead = int.len() % nf.group_size;
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (i + nf.group_size - lead) % nf.group_size == 0 {
            out.push_str(&nf.group_separator);
        }
        out.push(c);
    }
    out
}

fn join(int: &str, frac: &str, nf: &NumberFormat) -> String {
    if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}{}{frac}", nf.decimal_separator)
    }
}

/// Render `value` through `template` using the culture data in `nf`.
pub fn render(value: Money, template: &FormatTemplate, nf: &NumberFormat) -> String {
    let mut out = String::new();
    for piece in &template.pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Value { align, spec } => {
                let text = render_spec(value, spec, nf);
                out.push_str(&pad(text, *align));
            }
        }
    }
    out
}

/// The clipboard form of `value`: `0.00` with no symbol or grouping.
pub fn plain(value: Money) -> String {
    value.to_string()
}

fn pad(text: String, align: Option<i32>) -> String {
    let Some(align) = align else {
        return text;
    };
    let width = align.unsigned_abs() as usize;
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = " ".repeat(width - len);
    if align > 0 {
        fill + &text
    } else {
        text + &fill
    }
}

fn render_spec(value: Money, spec: &Spec, nf: &NumberFormat) -> String {
    match spec {
        Spec::Standard { kind, precision } => render_standard(value, *kind, *precision, nf),
        Spec::Custom(sections) => render_custom(value, sections, nf),
    }
}

fn render_standard(value: Money, kind: Standard, precision: Option<u8>, nf: &NumberFormat) -> String {
    let default_digits = match kind {
        Standard::Currency => nf.currency_decimal_digits,
        _ => MONEY_SCALE as u8,
    };
    let frac = usize::from(precision.unwrap_or(default_digits));
    let percent = kind == Standard::Percent;
    let (int, frac_digits) = Magnitude::of(value, percent).digits(frac);
    let rounded_zero = int == 0 && frac_digits.bytes().all(|b| b == b'0');
    let negative = value.is_negative() && !rounded_zero;

    let int = int.to_string();
    let int = match kind {
        Standard::Fixed | Standard::General => int,
        _ => group(&int, nf),
    };
    let number = join(&int, &frac_digits, nf);

    match kind {
        Standard::Currency if negative => nf.currency_negative(&number),
        Standard::Currency => nf.currency_positive(&number),
        Standard::Percent if negative => format!("{}{}", nf.negative_sign, nf.percent(&number)),
        Standard::Percent => nf.percent(&number),
        _ if negative => format!("{}{number}", nf.negative_sign),
        _ => number,
    }
}

fn render_custom(value: Money, sections: &[Section], nf: &NumberFormat) -> String {
    let positive = &sections[0];
    let explicit_negative = sections
        .get(1)
        .filter(|s| !s.tokens.is_empty())
        .filter(|_| value.is_negative());
    let section = explicit_negative.unwrap_or(positive);

    let rendered = render_section(value, section, nf);
    if value.is_zero() || rendered.zero {
        if let Some(zero) = sections.get(2) {
            return render_section(Money::ZERO, zero, nf).text;
        }
    }
    if value.is_negative() && explicit_negative.is_none() && !rendered.zero {
        return format!("{}{}", nf.negative_sign, rendered.text);
    }
    rendered.text
}

struct Rendered {
    text: String,
    /// The amount rounded to zero under this section's digits.
    zero: bool,
}

fn render_section(value: Money, section: &Section, nf: &NumberFormat) -> Rendered {
    let (number, zero) = match section.number {
        Some(p) => {
            let (int, frac) = Magnitude::of(value, section.percent).digits(p.frac_max);
            let zero = int == 0 && frac.bytes().all(|b| b == b'0');

            let mut int = if int == 0 {
                String::new()
            } else {
                int.to_string()
            };
            while int.len() < p.int_min {
                int.insert(0, '0');
            }
            if p.grouping {
                int = group(&int, nf);
            }
            let mut frac = frac;
            while frac.len() > p.frac_min && frac.ends_with('0') {
                frac.pop();
            }
            (join(&int, &frac, nf), zero)
        }
        None => (String::new(), value.is_zero()),
    };

    let mut text = String::new();
    for token in &section.tokens {
        match token {
            Token::Literal(s) => text.push_str(s),
            Token::Number => text.push_str(&number),
            Token::Percent => text.push_str(&nf.percent_symbol),
        }
    }
    Rendered { text, zero }
}

/// Read display text back into an amount.
///
/// This is the inverse of [`render`] for templates with a single value
/// placeholder. Templates that show fewer than two decimals lose the
/// dropped cents, so only those with two or more round-trip exactly.
pub fn parse(text: &str, template: &FormatTemplate, nf: &NumberFormat) -> Result<Money> {
    if template.value_count() != 1 {
        return Err(Error::parse(text));
    }
    let mut rest = text.trim();
    let mut spec = None;
    for piece in &template.pieces {
        match piece {
            Piece::Literal(lit) if spec.is_none() => {
                rest = rest.strip_prefix(lit.trim()).unwrap_or(rest).trim_start();
            }
            Piece::Literal(lit) => {
                rest = rest.strip_suffix(lit.trim()).unwrap_or(rest).trim_end();
            }
            Piece::Value { spec: s, .. } => spec = Some(s),
        }
    }
    let amount = match spec {
        Some(Spec::Standard { kind, .. }) => parse_standard(rest, *kind, nf),
        Some(Spec::Custom(sections)) => parse_custom_text(rest, sections, nf),
        None => None,
    };
    amount.ok_or_else(|| Error::parse(text))?
}

fn parse_standard(text: &str, kind: Standard, nf: &NumberFormat) -> Option<Result<Money>> {
    let mut negative = false;
    let mut s = text.trim();

    if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        negative = true;
        s = inner.trim();
    }
    let (neg, stripped) = strip_sign(s, nf);
    negative |= neg;
    s = stripped;

    match kind {
        Standard::Currency => {
            if let Some(at) = s.find(nf.currency_symbol.as_str()) {
                let (before, after) = s.split_at(at);
                let after = &after[nf.currency_symbol.len()..];
                // The symbol sits at one end; whatever is left is the number.
                s = if before.trim().is_empty() {
                    after.trim()
                } else {
                    before.trim()
                };
            }
            if !negative {
                (negative, s) = strip_sign(s, nf);
            }
        }
        Standard::Percent => {
            s = s.strip_suffix(nf.percent_symbol.as_str())?.trim_end();
        }
        _ => {}
    }
    Some(to_money(s, negative, kind == Standard::Percent, nf))
}

fn parse_custom_text(text: &str, sections: &[Section], nf: &NumberFormat) -> Option<Result<Money>> {
    for (index, section) in sections.iter().enumerate() {
        if section.tokens.is_empty() {
            continue;
        }
        let Some(core) = strip_section_literals(text, section) else {
            continue;
        };
        if index == 2 {
            return Some(Ok(Money::ZERO));
        }
        let (mut negative, mut core) = (index == 1, core);
        if sections.len() == 1 || sections.get(1).is_some_and(|s| s.tokens.is_empty()) {
            let (neg, stripped) = strip_sign(core, nf);
            negative |= neg;
            core = stripped;
        }
        if core.is_empty() && section.number.is_some() {
            return Some(Ok(Money::ZERO));
        }
        if is_numeric(core, nf) {
            return Some(to_money(core, negative, section.percent, nf));
        }
    }
    None
}

/// Strip a section's literal text from `text`, leaving the digits.
fn strip_section_literals<'a>(text: &'a str, section: &Section) -> Option<&'a str> {
    let mut rest = text;
    let mut seen_number = false;
    let mut leading = String::new();
    let mut trailing = String::new();
    for token in &section.tokens {
        let target = if seen_number {
            &mut trailing
        } else {
            &mut leading
        };
        match token {
            Token::Literal(s) => target.push_str(s),
            // The symbol is locale-specific; handled where the number is read.
            Token::Percent => {}
            Token::Number => seen_number = true,
        }
    }
    if section.number.is_none() {
        return (text.trim() == leading.trim()).then_some("");
    }
    let lead = leading.trim();
    let trail = trailing.trim();
    if !lead.is_empty() {
        rest = rest.trim_start().strip_prefix(lead)?;
    }
    if !trail.is_empty() {
        rest = rest.trim_end().strip_suffix(trail)?;
    }
    Some(rest.trim())
}

fn strip_sign<'a>(s: &'a str, nf: &NumberFormat) -> (bool, &'a str) {
    let sign = nf.negative_sign.as_str();
    if sign.is_empty() {
        return (false, s);
    }
    if let Some(rest) = s.strip_prefix(sign) {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_suffix(sign) {
        (true, rest.trim_end())
    } else {
        (false, s)
    }
}

/// `strip_prefix` for locale separators. An empty separator never matches.
fn strip_separator<'a>(s: &'a str, separator: &str) -> Option<&'a str> {
    if separator.is_empty() {
        None
    } else {
        s.strip_prefix(separator)
    }
}

fn is_numeric(s: &str, nf: &NumberFormat) -> bool {
    let mut rest = s.trim_end_matches(nf.percent_symbol.as_str()).trim();
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            rest = &rest[1..];
        } else if let Some(r) = strip_separator(rest, &nf.group_separator) {
            rest = r;
        } else if let Some(r) = strip_separator(rest, &nf.decimal_separator) {
            rest = r;
        } else {
            return false;
        }
    }
    true
}

/// Turn a localized digit string into an amount.
fn to_money(s: &str, negative: bool, percent: bool, nf: &NumberFormat) -> Result<Money> {
    let s = s.trim_end_matches(nf.percent_symbol.as_str()).trim();
    let mut normalized = String::with_capacity(s.len() + 1);
    if negative {
        normalized.push('-');
    }
    let mut seen_digit = false;
    let mut seen_point = false;
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            normalized.push(c);
            seen_digit = true;
            rest = &rest[1..];
        } else if let Some(r) = strip_separator(rest, &nf.decimal_separator)
            .filter(|_| !seen_point)
        {
            if !seen_digit {
                normalized.push('0');
            }
            normalized.push('.');
            seen_point = true;
            rest = r;
        } else if let Some(r) = strip_separator(rest, &nf.group_separator)
            .filter(|_| !seen_point)
        {
            rest = r;
        } else {
            return Err(Error::parse(s));
        }
    }
    if !seen_digit {
        return Err(Error::parse(s));
    }
    let mut amount = Decimal::from_str(&normalized).map_err(|_| Error::parse(s))?;
    if percent {
        amount /= Decimal::ONE_HUNDRED;
    }
    Money::from_decimal(amount)
}
