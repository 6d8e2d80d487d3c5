use scel_reader::WordInfo;
use scel_reader::scel::export::{to_ibus, write_ibus};

fn infos() -> Vec<WordInfo> {
    vec![
        WordInfo {
            word: "北京".to_string(),
            pinyin: "bei'jing".to_string(),
            count: 42,
        },
        WordInfo {
            word: "背景".to_string(),
            pinyin: "bei'jing".to_string(),
            count: 0,
        },
    ]
}

#[test]
fn records_render_one_per_line_with_trailing_newline() {
    assert_eq!(to_ibus(&infos()), "北京 bei'jing 42\n背景 bei'jing 0\n");
}

#[test]
fn streaming_writer_matches_in_memory_rendering() {
    let mut out = Vec::new();
    write_ibus(&mut out, &infos()).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf-8"), to_ibus(&infos()));
}

#[test]
fn empty_record_list_renders_single_newline() {
    let mut out = Vec::new();
    write_ibus(&mut out, &[]).expect("write");
    assert_eq!(out, b"\n");
    assert_eq!(to_ibus(&[]), "\n");
}

#[test]
fn embedded_separators_are_not_escaped() {
    let info = WordInfo {
        word: "a b".to_string(),
        pinyin: "x'y".to_string(),
        count: 1,
    };
    assert_eq!(info.to_string(), "a b x'y 1");
}
