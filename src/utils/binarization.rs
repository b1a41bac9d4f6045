use crate::models::RowSignal;

/// Binarize one luminance row with its own Otsu threshold
/// Returns a RowSignal where set = black
pub fn otsu_binarize_row(luma: &[u8]) -> RowSignal {
    let threshold = calculate_otsu_threshold(luma);
    RowSignal::from_luma(luma, threshold)
}

/// Binarize one luminance row against a fixed threshold
pub fn threshold_binarize_row(luma: &[u8], threshold: u8) -> RowSignal {
    RowSignal::from_luma(luma, threshold)
}

/// Calculate Otsu's optimal threshold
pub fn calculate_otsu_threshold(luma: &[u8]) -> u8 {
    let mut histogram = [0u32; 256];
    for &pixel in luma {
        histogram[pixel as usize] += 1;
    }

    let total = luma.len() as f64;
    if total == 0.0 {
        return 128;
    }
    let total_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;
    let mut class1_pixels = 0.0f64;
    let mut class1_sum = 0.0f64;

    // A threshold t puts intensities < t in the dark class
    for threshold in 1..=255usize {
        let count = histogram[threshold - 1] as f64;
        class1_pixels += count;
        class1_sum += (threshold - 1) as f64 * count;

        let class2_pixels = total - class1_pixels;
        if class1_pixels == 0.0 || class2_pixels == 0.0 {
            continue;
        }

        let class1_mean = class1_sum / class1_pixels;
        let class2_mean = (total_sum - class1_sum) / class2_pixels;
        let weight1 = class1_pixels / total;
        let weight2 = class2_pixels / total;
        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}
