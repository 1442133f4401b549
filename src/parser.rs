/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    self,
    branch::alt,
    character::complete::{digit1, space0},
    combinator::{opt, value},
    error::ErrorKind,
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::EeError;

/// Parse an EE shorthand string to a float.
///
/// Accepted forms: a plain decimal ("3.1"), a prefix letter in
/// place of the decimal point ("4k7"), or a decimal with a
/// trailing prefix ("4.7k", "4.70 k"). The unity aliases r/R/A/V/v
/// carry no magnitude ("100R" is plain 100).
pub fn parse_notation(input: &str) -> Result<f64, EeError> {
    match notation(input) {
        Ok(("", v)) => Ok(v),
        Ok((r, _)) => {
            Err(EeError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(EeError::ParseError(format!("{}", err))),
    }
}

/// Parser for EE shorthand notation.
pub fn notation(input: &str) -> IResult<&str, f64> {
    let (input, (_, sign, int_part, tail, _)) = tuple((
        space0,
        opt(sign),
        digit1,
        opt(alt((dot_tail, prefix_tail))),
        space0,
    ))(input)?;

    let (frac, exponent) = tail.unwrap_or(("0", 0));
    let num = match format!("{}.{}", int_part, frac).parse::<f64>() {
        Ok(num) => num,
        Err(_) => {
            return Err(nom::Err::Error(nom::error::Error {
                input,
                code: ErrorKind::Float,
            }))
        }
    };

    Ok((input, sign.unwrap_or(1.0) * num * 10f64.powi(exponent)))
}

/* A literal decimal point, optionally followed by a prefix letter
 * selecting the exponent ("4.7" / "4.7k"). */
fn dot_tail(input: &str) -> IResult<&str, (&str, i32)> {
    let (input, (frac, prefix)) = preceded(
        char('.'),
        tuple((digit1, preceded(space0, opt(prefix_exponent)))),
    )(input)?;
    Ok((input, (frac, prefix.unwrap_or(0))))
}

/* A prefix letter acting as the decimal point ("4k7", "4k"),
 * simultaneously selecting the exponent. */
fn prefix_tail(input: &str) -> IResult<&str, (&str, i32)> {
    let (input, (exponent, frac)) =
        tuple((preceded(space0, prefix_exponent), opt(digit1)))(input)?;
    Ok((input, (frac.unwrap_or("0"), exponent)))
}

/// Parser for a single SI prefix letter, including the aliases
/// u (micro), K (kilo) and the unity suffixes r/R/A/V/v.
pub fn prefix_exponent(input: &str) -> IResult<&str, i32> {
    alt((
        value(-24, char('y')),
        value(-21, char('z')),
        value(-18, char('a')),
        value(-15, char('f')),
        value(-12, char('p')),
        value(-9, char('n')),
        value(-6, alt((char('µ'), char('μ'), char('u')))),
        value(-3, char('m')),
        value(
            0,
            alt((char('r'), char('R'), char('A'), char('V'), char('v'))),
        ),
        value(3, alt((char('k'), char('K')))),
        value(6, char('M')),
        value(9, char('G')),
        value(12, char('T')),
        value(15, char('P')),
        value(18, char('E')),
        value(21, char('Z')),
        value(24, char('Y')),
    ))(input)
}

fn sign(input: &str) -> IResult<&str, f64> {
    alt((value(-1.0, char('-')), value(1.0, char('+'))))(input)
}

/* Monomorphised version of char. */

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}
