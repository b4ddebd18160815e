use crate::{presentation::format::format_number, util::num::count_to_f64};

/// Shape of a text histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramOptions {
    /// Number of equal-width bins.
    pub bins:     usize,
    /// Length in characters of the longest bar.
    pub width:    usize,
    /// Character bars are drawn with.
    pub bar_char: char,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self { bins:     20,
               width:    40,
               bar_char: '█', }
    }
}

/// Renders samples as a text histogram, one line per bin.
///
/// Lines run from the highest bin to the lowest. Each starts with the bin's
/// lower boundary, bars are scaled against the fullest bin, and the bin
/// holding the sample mean is marked. Non-finite samples are ignored. An
/// empty sample set, or one where every sample is equal, yields a single
/// explanatory line.
///
/// ## Example
/// ```
/// use fermi::presentation::histogram::{HistogramOptions, generate_text_histogram};
///
/// let samples = [1.0, 2.0, 2.0, 3.0];
/// let options = HistogramOptions { bins: 2, ..HistogramOptions::default() };
/// let lines = generate_text_histogram(Some(&samples[..]), &options);
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].starts_with("2 |"));
/// assert!(lines[0].ends_with("3 <- mean"));
///
/// assert_eq!(generate_text_histogram(None, &options),
///            vec!["No valid samples to display.".to_string()]);
/// ```
#[must_use]
pub fn generate_text_histogram(samples: Option<&[f64]>, options: &HistogramOptions) -> Vec<String> {
    let valid: Vec<f64> = samples.unwrap_or_default()
                                 .iter()
                                 .copied()
                                 .filter(|x| x.is_finite())
                                 .collect();
    if valid.is_empty() {
        return vec!["No valid samples to display.".to_string()];
    }

    let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
    let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![format!("All {} samples equal {}.", valid.len(), format_number(min, 0))];
    }

    let bins = options.bins.max(1);
    let bin_width = (max - min) / count_to_f64(bins);
    let mut counts = vec![0_usize; bins];
    for x in &valid {
        counts[bin_index(*x, min, bin_width, bins)] += 1;
    }

    let mean = valid.iter().sum::<f64>() / count_to_f64(valid.len());
    let mean_bin = bin_index(mean, min, bin_width, bins);
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    let labels: Vec<String> = (0..bins).map(|i| format_number(bin_width.mul_add(count_to_f64(i), min), 0))
                                       .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    (0..bins).rev()
             .map(|i| {
                 let bar_len = bar_length(counts[i], max_count, options.width);
                 let bar: String = std::iter::repeat_n(options.bar_char, bar_len).collect();
                 let mut line = format!("{:>label_width$} |{bar} {}", labels[i], counts[i]);
                 if i == mean_bin {
                     line.push_str(" <- mean");
                 }
                 line
             })
             .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(x: f64, min: f64, bin_width: f64, bins: usize) -> usize {
    let index = ((x - min) / bin_width).floor().max(0.0) as usize;
    index.min(bins - 1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_length(count: usize, max_count: usize, width: usize) -> usize {
    (count_to_f64(count) / count_to_f64(max_count) * count_to_f64(width)).round() as usize
}
