//! Sequential console prompting for the calculator inputs.

use std::io::{BufRead, Write};

use bt_core::Real;

use crate::error::{ThermalError, ThermalResult};
use crate::heatsink::HeatsinkInputs;

/// One of the six values the calculator asks for, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TempJunction,
    TempAmbient,
    VoltageDrop,
    Current,
    JunctionCase,
    CaseSink,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        InputField::TempJunction,
        InputField::TempAmbient,
        InputField::VoltageDrop,
        InputField::Current,
        InputField::JunctionCase,
        InputField::CaseSink,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            InputField::TempJunction => "Enter operating junction temperature (\u{b0}C): ",
            InputField::TempAmbient => "Enter max. ambient operating temperature (\u{b0}C): ",
            InputField::VoltageDrop => "Enter voltage drop across junction (V): ",
            InputField::Current => "Enter current at full load (A): ",
            InputField::JunctionCase => {
                "Enter specified junction to case thermal resistance (\u{b0}C/W): "
            }
            InputField::CaseSink => {
                "Enter specified case to heatsink thermal resistance (\u{b0}C/W): "
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::TempJunction => "junction temperature",
            InputField::TempAmbient => "ambient temperature",
            InputField::VoltageDrop => "voltage drop",
            InputField::Current => "current",
            InputField::JunctionCase => "junction to case resistance",
            InputField::CaseSink => "case to heatsink resistance",
        }
    }
}

/// Values supplied ahead of time (e.g. from command-line flags).
///
/// A preset field is used as-is and its prompt is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeatsinkPreset {
    pub temp_junction_c: Option<Real>,
    pub temp_ambient_c: Option<Real>,
    pub voltage_drop_v: Option<Real>,
    pub current_a: Option<Real>,
    pub r_junction_case: Option<Real>,
    pub r_case_sink: Option<Real>,
}

impl HeatsinkPreset {
    pub fn get(&self, field: InputField) -> Option<Real> {
        match field {
            InputField::TempJunction => self.temp_junction_c,
            InputField::TempAmbient => self.temp_ambient_c,
            InputField::VoltageDrop => self.voltage_drop_v,
            InputField::Current => self.current_a,
            InputField::JunctionCase => self.r_junction_case,
            InputField::CaseSink => self.r_case_sink,
        }
    }
}

/// Read all six inputs in order, prompting on `output` for each one not preset.
pub fn prompt_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    preset: &HeatsinkPreset,
) -> ThermalResult<HeatsinkInputs> {
    let mut values = [0.0; 6];
    for (slot, field) in values.iter_mut().zip(InputField::ALL) {
        *slot = match preset.get(field) {
            Some(v) => v,
            None => read_value(input, output, field)?,
        };
    }

    let [
        temp_junction_c,
        temp_ambient_c,
        voltage_drop_v,
        current_a,
        r_junction_case,
        r_case_sink,
    ] = values;

    Ok(HeatsinkInputs {
        temp_junction_c,
        temp_ambient_c,
        voltage_drop_v,
        current_a,
        r_junction_case,
        r_case_sink,
    })
}

fn read_value<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: InputField,
) -> ThermalResult<Real> {
    write!(output, "{}", field.prompt())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ThermalError::UnexpectedEof {
            field: field.label(),
        });
    }

    let answer = line.trim();
    answer.parse::<Real>().map_err(|_| ThermalError::Parse {
        field: field.label(),
        input: answer.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(stdin: &str, preset: &HeatsinkPreset) -> (ThermalResult<HeatsinkInputs>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_inputs(&mut input, &mut output, preset);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_values_in_prompt_order() {
        let (result, transcript) = run("100\n50\n4.7\n1\n4\n0.5\n", &HeatsinkPreset::default());
        let inputs = result.unwrap();
        assert_eq!(
            inputs,
            HeatsinkInputs {
                temp_junction_c: 100.0,
                temp_ambient_c: 50.0,
                voltage_drop_v: 4.7,
                current_a: 1.0,
                r_junction_case: 4.0,
                r_case_sink: 0.5,
            }
        );

        let expected: String = InputField::ALL.iter().map(|f| f.prompt()).collect();
        assert_eq!(transcript, expected);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let (result, _) = run(" 100 \r\n\t50\n4.7\n1\n4\n0.5", &HeatsinkPreset::default());
        let inputs = result.unwrap();
        assert_eq!(inputs.temp_junction_c, 100.0);
        assert_eq!(inputs.temp_ambient_c, 50.0);
        assert_eq!(inputs.r_case_sink, 0.5);
    }

    #[test]
    fn malformed_number_fails_loudly() {
        let (result, transcript) = run("100\nwarm\n", &HeatsinkPreset::default());
        match result {
            Err(ThermalError::Parse { field, input }) => {
                assert_eq!(field, "ambient temperature");
                assert_eq!(input, "warm");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
        // No prompts past the failing one.
        assert!(!transcript.contains(InputField::VoltageDrop.prompt()));
    }

    #[test]
    fn empty_answer_is_a_parse_error() {
        let (result, _) = run("\n", &HeatsinkPreset::default());
        assert!(matches!(result, Err(ThermalError::Parse { .. })));
    }

    #[test]
    fn early_end_of_input_is_reported() {
        let (result, _) = run("100\n50\n4.7\n", &HeatsinkPreset::default());
        match result {
            Err(ThermalError::UnexpectedEof { field }) => assert_eq!(field, "current"),
            other => panic!("expected eof error, got {other:?}"),
        }
    }

    #[test]
    fn preset_values_skip_their_prompts() {
        let preset = HeatsinkPreset {
            temp_junction_c: Some(100.0),
            current_a: Some(1.0),
            r_case_sink: Some(0.5),
            ..HeatsinkPreset::default()
        };
        let (result, transcript) = run("50\n4.7\n4\n", &preset);
        let inputs = result.unwrap();
        assert_eq!(inputs.temp_junction_c, 100.0);
        assert_eq!(inputs.temp_ambient_c, 50.0);
        assert_eq!(inputs.voltage_drop_v, 4.7);
        assert_eq!(inputs.current_a, 1.0);
        assert_eq!(inputs.r_junction_case, 4.0);
        assert_eq!(inputs.r_case_sink, 0.5);

        assert!(!transcript.contains(InputField::TempJunction.prompt()));
        assert!(!transcript.contains(InputField::Current.prompt()));
        assert!(transcript.contains(InputField::TempAmbient.prompt()));
    }

    #[test]
    fn special_float_spellings_are_accepted() {
        let (result, _) = run("inf\n50\n0\n1\n4\n0.5\n", &HeatsinkPreset::default());
        let inputs = result.unwrap();
        assert_eq!(inputs.temp_junction_c, f64::INFINITY);
        assert_eq!(inputs.voltage_drop_v, 0.0);
    }
}
