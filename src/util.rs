//! Utility functions for Carteiro.

use crate::clipboard;
use crate::error::Result;
use crate::session::Sample;

/// Format the collected samples as tab-separated values, one sample per
/// line, in entry order. Times keep their full precision.
pub fn samples_tsv(samples: &[Sample]) -> String {
    let mut out = String::with_capacity(samples.len() * 12);
    for sample in samples {
        out.push_str(&format!("{}\t{}\n", sample.vertices, sample.time_ms));
    }
    out
}

/// Copy the collected samples to the clipboard as TSV.
pub fn copy_samples(samples: &[Sample]) -> Result<()> {
    clipboard::copy_to_clipboard(&samples_tsv(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_keeps_entry_order_and_precision() {
        let samples = vec![
            Sample::new(6, 45.0),
            Sample::new(4, 12.7),
            Sample::new(6, 90.25),
        ];
        assert_eq!(samples_tsv(&samples), "6\t45\n4\t12.7\n6\t90.25\n");
    }

    #[test]
    fn tsv_of_no_samples_is_empty() {
        assert_eq!(samples_tsv(&[]), "");
    }
}
