//! Interactive sample collection.
//!
//! The collection phase runs on the plain terminal, before raw mode: a
//! prompt for the session parameter, then vertex-count/execution-time pairs
//! until the sentinel. Readers and writers are passed in so the whole
//! dialogue can be driven from in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::{CarteiroError, Result};
use crate::session::{Sample, Session};

/// Vertex count that ends the collection loop without being stored.
pub const SENTINEL: i64 = -1;

/// Prompt for the session parameter (number of odd-degree vertices).
pub const PROMPT_ODD_VERTICES: &str = "Informe o número de vértices ímpares do grafo: ";

/// Prompt for the next vertex count (or the sentinel).
pub const PROMPT_VERTEX_COUNT: &str =
    "Informe a quantidade de vértices do grafo (ou -1 para terminar): ";

/// Prompt for the execution time of a given vertex count.
pub fn time_prompt(vertices: i64) -> String {
    format!("Informe o tempo de execução para {} vértices (em ms): ", vertices)
}

/// Write a prompt, then read and trim one reply line.
///
/// End of input yields an empty reply, which the numeric parsers reject.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for an integer. Fails on anything `i64` cannot parse.
pub fn prompt_int<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i64> {
    let reply = prompt_line(input, output, prompt)?;
    reply
        .parse()
        .map_err(|source| CarteiroError::parse_int(reply, source))
}

/// Prompt for a number. Accepts anything `f64` can parse, integers included.
pub fn prompt_float<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64> {
    let reply = prompt_line(input, output, prompt)?;
    reply
        .parse()
        .map_err(|source| CarteiroError::parse_float(reply, source))
}

/// Run the full collection dialogue.
///
/// The first parse failure aborts the session; there is no retry. An
/// immediate sentinel is legal and produces an empty session.
pub fn collect_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Session> {
    let odd_vertices = prompt_int(input, output, PROMPT_ODD_VERTICES)?;

    let mut samples = Vec::new();
    loop {
        let vertices = prompt_int(input, output, PROMPT_VERTEX_COUNT)?;
        if vertices == SENTINEL {
            break;
        }
        let time_ms = prompt_float(input, output, &time_prompt(vertices))?;
        samples.push(Sample::new(vertices, time_ms));
    }

    Ok(Session::new(odd_vertices, samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> (Result<Session>, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let result = collect_session(&mut reader, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn collects_reference_session() {
        let (result, transcript) = collect("3\n4\n12.7\n6\n45.0\n8\n90.3\n-1\n");
        let session = result.unwrap();

        assert_eq!(session.odd_vertices, 3);
        assert_eq!(session.samples.len(), 3);
        assert_eq!(session.samples[0], Sample::new(4, 12.7));
        assert_eq!(session.samples[1], Sample::new(6, 45.0));
        assert_eq!(session.samples[2], Sample::new(8, 90.3));

        // Prompts are emitted verbatim, in dialogue order.
        let expected = format!(
            "{}{}{}{}{}{}{}{}",
            PROMPT_ODD_VERTICES,
            PROMPT_VERTEX_COUNT,
            time_prompt(4),
            PROMPT_VERTEX_COUNT,
            time_prompt(6),
            PROMPT_VERTEX_COUNT,
            time_prompt(8),
            PROMPT_VERTEX_COUNT,
        );
        assert_eq!(transcript, expected);
    }

    #[test]
    fn immediate_sentinel_is_a_valid_empty_session() {
        let (result, transcript) = collect("7\n-1\n");
        let session = result.unwrap();

        assert_eq!(session.odd_vertices, 7);
        assert!(session.is_empty());
        assert_eq!(
            transcript,
            format!("{}{}", PROMPT_ODD_VERTICES, PROMPT_VERTEX_COUNT)
        );
    }

    #[test]
    fn duplicate_vertex_counts_are_kept_in_entry_order() {
        let (result, _) = collect("1\n6\n10.0\n6\n20.0\n-1\n");
        let session = result.unwrap();

        assert_eq!(session.samples[0], Sample::new(6, 10.0));
        assert_eq!(session.samples[1], Sample::new(6, 20.0));
    }

    #[test]
    fn only_exact_minus_one_is_the_sentinel() {
        let (result, _) = collect("1\n-5\n2.5\n-1\n");
        let session = result.unwrap();

        assert_eq!(session.samples, vec![Sample::new(-5, 2.5)]);
    }

    #[test]
    fn replies_are_trimmed_before_parsing() {
        let (result, _) = collect("  3 \n 4\n 12.5 \n-1\n");
        let session = result.unwrap();

        assert_eq!(session.odd_vertices, 3);
        assert_eq!(session.samples, vec![Sample::new(4, 12.5)]);
    }

    #[test]
    fn integer_reply_is_accepted_at_the_time_prompt() {
        let (result, _) = collect("3\n4\n45\n-1\n");
        let session = result.unwrap();

        assert_eq!(session.samples[0].time_ms, 45.0);
    }

    #[test]
    fn non_numeric_parameter_fails() {
        let (result, transcript) = collect("abc\n");

        match result {
            Err(CarteiroError::ParseInt { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("expected ParseInt error, got {:?}", other),
        }
        assert_eq!(transcript, PROMPT_ODD_VERTICES);
    }

    #[test]
    fn float_reply_is_rejected_at_an_integer_prompt() {
        let (result, _) = collect("3\n12.7\n");

        match result {
            Err(CarteiroError::ParseInt { input, .. }) => assert_eq!(input, "12.7"),
            other => panic!("expected ParseInt error, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_time_fails() {
        let (result, _) = collect("3\n4\nfast\n");

        match result {
            Err(CarteiroError::ParseFloat { input, .. }) => assert_eq!(input, "fast"),
            other => panic!("expected ParseFloat error, got {:?}", other),
        }
    }

    #[test]
    fn end_of_input_fails_like_a_parse_error() {
        let (result, _) = collect("3\n");

        match result {
            Err(CarteiroError::ParseInt { input, .. }) => assert_eq!(input, ""),
            other => panic!("expected ParseInt error, got {:?}", other),
        }
    }
}
