//! Integration tests for UPC/EAN row decoding
//!
//! Symbols are rendered with the synthesizer, optionally pushed through an
//! image file or a lighting gradient, and decoded through the public API. They
//! protect the guard search, digit matching and checksum against regressions.

use rust_upcean::tools::synth::{QUIET_ZONE_MODULES, encode_modules, synth_luma_row, synth_row};
use rust_upcean::tools::{LumaImage, decode_line, load_luma, save_luma, scan_image};
use rust_upcean::{
    BarcodeFormat, DecodeHints, ErrorKind, GuardSpan, RowSignal, UpcEanFormat, UpcEanReader,
    decode_luma_row, decode_row,
};
use std::path::PathBuf;

const KNOWN_CODES: [(BarcodeFormat, &str); 8] = [
    (BarcodeFormat::Ean13, "5901234123457"),
    (BarcodeFormat::Ean13, "4006381333931"),
    (BarcodeFormat::Ean13, "9780201379624"),
    (BarcodeFormat::UpcA, "012345678905"),
    (BarcodeFormat::UpcA, "036000291452"),
    (BarcodeFormat::Ean8, "96385074"),
    (BarcodeFormat::Ean8, "55123457"),
    (BarcodeFormat::UpcE, "01234565"),
];

fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rust_upcean_{}_{}.png", std::process::id(), name))
}

/// Test every known code at several module widths
#[test]
fn test_decode_known_codes_at_all_scales() {
    for (format, text) in KNOWN_CODES {
        for unit in 1..=5 {
            let row = synth_row(format, text, unit).unwrap();
            let result = decode_row(&row, format.into(), &DecodeHints::default())
                .unwrap_or_else(|e| panic!("{format} {text} at {unit}px: {e}"));
            assert_eq!(result.text, text);
            assert_eq!(result.format, format);

            let begin = QUIET_ZONE_MODULES * unit;
            assert_eq!(result.span.begin, begin);
            assert_eq!(result.start_guard, GuardSpan::new(begin, begin + 3 * unit));
        }
    }
}

/// Symbol widths are fixed per family
#[test]
fn test_span_width_matches_family() {
    let widths = [
        (BarcodeFormat::Ean13, "5901234123457", 95),
        (BarcodeFormat::UpcA, "036000291452", 95),
        (BarcodeFormat::Ean8, "96385074", 67),
        (BarcodeFormat::UpcE, "01234565", 51),
    ];
    for (format, text, modules) in widths {
        let row = synth_row(format, text, 2).unwrap();
        let result = decode_row(&row, format.into(), &DecodeHints::default()).unwrap();
        assert_eq!(result.span.width(), modules * 2, "{format}");
    }
}

/// A wrong check digit must never decode
#[test]
fn test_bad_check_digits_rejected() {
    let bad = [
        (BarcodeFormat::Ean13, "5901234123458"),
        (BarcodeFormat::UpcA, "012345678908"),
        (BarcodeFormat::Ean8, "96385075"),
        (BarcodeFormat::UpcE, "01234560"),
    ];
    for (format, text) in bad {
        let row = synth_row(format, text, 3).unwrap();
        let err = decode_row(&row, format.into(), &DecodeHints::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Checksum, "{format} {text}");
    }
}

/// EAN-13 symbols without a leading zero are not UPC-A
#[test]
fn test_upca_reader_rejects_non_zero_led_ean13() {
    let row = synth_row(BarcodeFormat::Ean13, "5901234123457", 2).unwrap();
    let err = UpcEanReader::upca()
        .decode_row(&row, &DecodeHints::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

/// Symbol placed far into a wide row
#[test]
fn test_symbol_offset_in_wide_row() {
    let luma = synth_luma_row(BarcodeFormat::Ean8, "96385074", 3).unwrap();
    let mut wide = vec![255u8; 300];
    wide.extend_from_slice(&luma);
    wide.extend(std::iter::repeat_n(255u8, 100));

    let result = decode_luma_row(&wide, UpcEanFormat::Ean8, &DecodeHints::default()).unwrap();
    assert_eq!(result.text, "96385074");
    assert_eq!(result.span.begin, 300 + QUIET_ZONE_MODULES * 3);
}

/// Uneven lighting across the row
#[test]
fn test_lighting_gradient() {
    let luma = synth_luma_row(BarcodeFormat::Ean13, "4006381333931", 3).unwrap();
    let len = luma.len();
    let shaded: Vec<u8> = luma
        .iter()
        .enumerate()
        .map(|(x, &p)| {
            let shade = (x * 40 / len) as u8;
            if p == 0 { 20 + shade } else { 190 + shade }
        })
        .collect();

    let result = decode_luma_row(&shaded, UpcEanFormat::Ean13, &DecodeHints::default()).unwrap();
    assert_eq!(result.text, "4006381333931");
}

/// Round trip through a PNG file and a whole-image scan
#[test]
fn test_png_round_trip_scan() {
    let luma = synth_luma_row(BarcodeFormat::UpcA, "036000291452", 2).unwrap();
    let img = LumaImage::from_repeated_row(&luma, 40);
    let path = temp_png("upca");
    save_luma(&path, &img).unwrap();

    let loaded = load_luma(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, img);

    let hit = scan_image(&loaded, &UpcEanFormat::ALL, &DecodeHints::default()).unwrap();
    assert_eq!(hit.result.format, BarcodeFormat::UpcA);
    assert_eq!(hit.result.text, "036000291452");
    assert_eq!(hit.row, 20);
}

/// Loading a missing file is an error, not a panic
#[test]
fn test_load_missing_image() {
    assert!(load_luma(temp_png("does_not_exist")).is_err());
}

/// One start guard, several families: only the matching one decodes
#[test]
fn test_decode_line_tries_each_family() {
    for (format, text) in KNOWN_CODES {
        let row = synth_row(format, text, 2).unwrap();
        let result = decode_line(&row, &UpcEanFormat::ALL, &DecodeHints::default()).unwrap();
        assert_eq!(result.text, text);
        assert_eq!(result.format, format);
    }
}

/// Runs at `unit` px/module with every internal edge moved by -1, 0 or +1 px
fn jittered_row(modules: &[usize], unit: usize, seed: &mut u32) -> RowSignal {
    let mut edges = Vec::with_capacity(modules.len() + 1);
    let mut x = 0usize;
    edges.push(x);
    for &m in modules {
        x += m * unit;
        edges.push(x);
    }
    let last = edges.len() - 1;
    for edge in &mut edges[1..last] {
        *seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        match (*seed >> 16) % 3 {
            0 => *edge -= 1,
            1 => *edge += 1,
            _ => {}
        }
    }
    let runs: Vec<usize> = edges.windows(2).map(|w| w[1] - w[0]).collect();
    RowSignal::from_runs(&runs, false)
}

/// Edge jitter of one pixel at 4 px/module: a fair share decodes, none decodes wrong
#[test]
fn test_jittered_edges_decode_without_errors() {
    let text = "5901234123457";
    let modules = encode_modules(BarcodeFormat::Ean13, text).unwrap();
    let mut seed = 0x0bad_5eed_u32;
    let hints = DecodeHints::default();

    let (mut ok, mut wrong) = (0usize, 0usize);
    let total = 300;
    for _ in 0..total {
        let row = jittered_row(&modules, 4, &mut seed);
        match decode_row(&row, UpcEanFormat::Ean13, &hints) {
            Ok(result) if result.text == text => ok += 1,
            Ok(_) => wrong += 1,
            Err(_) => {}
        }
    }
    assert_eq!(wrong, 0);
    assert!(ok * 5 >= total, "only {ok}/{total} jittered rows decoded");
}

/// Pseudo-random rows never decode
#[test]
fn test_noise_rows_do_not_decode() {
    let mut seed = 0x2545_f491_u32;
    for _ in 0..50 {
        let runs: Vec<usize> = (0..120)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                1 + ((seed >> 16) % 6) as usize
            })
            .collect();
        let row = RowSignal::from_runs(&runs, false);
        for format in UpcEanFormat::ALL {
            assert!(decode_row(&row, format, &DecodeHints::default()).is_err());
        }
    }
}

/// Empty and all-white rows report NotFound
#[test]
fn test_blank_rows_not_found() {
    for row in [RowSignal::new(0), RowSignal::new(500)] {
        for format in UpcEanFormat::ALL {
            let err = decode_row(&row, format, &DecodeHints::default()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
    }
}
