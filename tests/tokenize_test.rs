mod common;
use bas2tap::lang::KeywordTable;
use bas2tap::tokenize;
use common::*;
use rand::Rng;

#[test]
fn test_line_numbers() {
    for n in 0..=9999u16 {
        let program = tokenize(format!("{} CLS\n", n).as_bytes()).unwrap();
        assert_eq!(u16::from_be_bytes([program[0], program[1]]), n);
        assert_eq!(split_lines(&program), vec![(n, &[0xFB, 0x0D][..])]);
    }
}

#[test]
fn test_keyword_casing() {
    let table = KeywordTable::spectrum();
    let mut rng = rand::thread_rng();
    for (spelling, token) in table.iter() {
        if spelling.starts_with(|c: char| !c.is_ascii_alphabetic()) {
            continue;
        }
        let random: String = spelling
            .chars()
            .map(|c| {
                if rng.gen::<bool>() {
                    c.to_ascii_lowercase()
                } else {
                    c
                }
            })
            .collect();
        for variant in &[
            spelling.to_string(),
            spelling.to_ascii_lowercase(),
            random,
        ] {
            let program = tokenize(format!("10 {}\n", variant).as_bytes()).unwrap();
            assert_eq!(
                split_lines(&program),
                vec![(10, &[token, 0x0D][..])],
                "{}",
                variant
            );
        }
    }
}

#[test]
fn test_relational_tokens() {
    let program = tokenize(b"10 IF A<=B OR A>=C OR A<>D OR A<E THEN STOP\n").unwrap();
    let body = split_lines(&program)[0].1;
    assert_eq!(
        body,
        b"\xFAA\xC7B\xC5A\xC8C\xC5A\xC9D\xC5A<E\xCB\xE2\x0D"
    );
}

#[test]
fn test_string_keeps_symbols() {
    let program = tokenize(b"10 PRINT \"A<B\"").unwrap();
    assert_eq!(split_lines(&program), vec![(10, &b"\xF5\"A<B\"\x0D"[..])]);
}

#[test]
fn test_comment_after_line() {
    let program = tokenize(b"10 PRINT 1\n; say hello\n20 PRINT \"HELLO\"\n").unwrap();
    let lines = split_lines(&program);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, 10);
    assert_eq!(lines[1], (20, &b"\xF5\"HELLO\"\x0D"[..]));
}

#[test]
fn test_end_to_end() {
    let program = tokenize(b"10 PRINT \"HI\"\n20 LET A=BIN 101\n").unwrap();
    let lines = split_lines(&program);
    let total: usize = lines.iter().map(|(_, body)| body.len() + 4).sum();
    assert_eq!(total, program.len());
    assert_eq!(lines[0], (10, &b"\xF5\"HI\"\x0D"[..]));
    let (number, body) = lines[1];
    assert_eq!(number, 20);
    assert_eq!(&body[..7], b"\xF1A=\xC4101");
    assert_eq!(&body[7..13], &[0x0E, 0, 0, 5, 0, 0]);
    assert_eq!(decode_number(&body[8..13]), 5.0);
}

#[test]
fn test_listing() {
    let source = "\
; bouncing ball
10 BORDER 0: PAPER 0: INK 7: CLS
20 LET x=16: LET y=11
30 PRINT AT y,x;\"O\"
40 IF INKEY$<>\"\" THEN GO TO 40
50 GO SUB 100: GO TO 30
100 RETURN
";
    let program = tokenize(source.as_bytes()).unwrap();
    let lines = split_lines(&program);
    let numbers: Vec<u16> = lines.iter().map(|(n, _)| *n).collect();
    assert_eq!(numbers, [10, 20, 30, 40, 50, 100]);
    for (_, body) in &lines {
        assert_eq!(body.last(), Some(&0x0D));
    }
    assert_eq!(lines[3].1[..3], [0xFA, 0xA6, 0xC9]);
    assert_eq!(lines[5].1, &[0xFE, 0x0D]);
}
