//! Text dump transmitter tests

use ir_pulse_encoder::config::{Carrier, PulseTiming};
use ir_pulse_encoder::encoder::PulseEncoder;
use ir_pulse_encoder::pulse::PulseTrain;
use ir_pulse_encoder::transmitter::{self, TextDump, Transmitter, TxError};

fn dump(train: &PulseTrain) -> String {
    let mut tx = TextDump::new(Vec::new());
    tx.transmit(train, &Carrier::IR_38KHZ).unwrap();
    String::from_utf8(tx.into_inner()).unwrap()
}

#[test]
fn test_dump_alternates_labels() {
    let train = PulseTrain::from(vec![3500, 1700, 440, 15000]);
    assert_eq!(
        dump(&train),
        "pulse 3500\nspace 1700\npulse 440\nspace 15000\n"
    );
}

#[test]
fn test_dump_empty_train() {
    assert_eq!(dump(&PulseTrain::new()), "");
}

#[test]
fn test_dump_encoded_train() {
    let mut encoder = PulseEncoder::new(PulseTiming::default());
    let trains = encoder.encode_str("41");
    let text = dump(&trains[0]);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "pulse 3500");
    assert_eq!(lines[1], "space 1700");
    assert_eq!(lines[5], "space 1300");
    assert_eq!(lines[19], "space 15000");
    for (i, line) in lines.iter().enumerate() {
        let label = if i % 2 == 0 { "pulse " } else { "space " };
        assert!(line.starts_with(label), "line {} = {:?}", i, line);
    }
}

#[test]
fn test_dump_appends_across_trains() {
    let mut tx = TextDump::new(Vec::new());
    let carrier = Carrier::IR_38KHZ;

    tx.transmit(&PulseTrain::from(vec![1, 2]), &carrier).unwrap();
    tx.transmit(&PulseTrain::from(vec![3, 4]), &carrier).unwrap();

    assert_eq!(tx.get_ref().as_slice(), b"pulse 1\nspace 2\npulse 3\nspace 4\n");
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dump_write_error() {
    let mut tx = TextDump::new(BrokenPipe);
    let err = tx
        .transmit(&PulseTrain::from(vec![1, 2]), &Carrier::IR_38KHZ)
        .unwrap_err();
    assert!(matches!(err, TxError::Io(_)));
}

#[test]
fn test_boxed_transmitter_forwards() {
    let mut boxed: Box<dyn Transmitter> = Box::new(TextDump::new(BrokenPipe));
    let result = boxed.transmit(&PulseTrain::from(vec![1, 2]), &Carrier::IR_38KHZ);
    assert!(result.is_err());
}

#[test]
fn test_select_without_gpio() {
    assert!(transmitter::select(None).is_ok());
    assert!(transmitter::select(Some(0)).is_ok());
}

#[test]
fn test_select_gpio_falls_back_on_host() {
    assert!(transmitter::select(Some(4)).is_ok());
}

#[test]
fn test_error_display() {
    assert_eq!(TxError::Driver { code: 259 }.to_string(), "driver error 259");
    assert_eq!(
        TxError::InvalidPin(99).to_string(),
        "GPIO 99 is not a usable output pin"
    );
}
