use serde_derive::{Deserialize, Serialize};
use std::{
    fmt,
    fs::File,
    io::Write,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};
use tracing::*;

/// Thread safe json logger that writes a `CheckRecord` into a given log file for every
/// validity check.
pub struct JsonLogger {
    log_file: Mutex<File>,
    check_record: Mutex<CheckRecord>,
    next_id: AtomicU64,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
            check_record: Mutex::new(CheckRecord::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, span: &span::Attributes) -> Id {
        let mut record = Recorder::new();
        span.record(&mut record);
        if let Ok(mut rec) = self.check_record.lock() {
            *rec = CheckRecord::new();
            rec.argument = record.argument;
        }
        Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut event_record = Recorder::new();
        event.record(&mut event_record);

        if let Some(event_type) = &event_record.event {
            match event_type.as_ref() {
                super::EVALUATE => {
                    let _ = self.check_record.lock().map(|mut rec| {
                        if let Some(evaluate) = EvaluateRecord::try_from(event_record) {
                            rec.evaluations.push(evaluate);
                        }
                    });
                }
                super::VALID | super::INVALID => {
                    let _ = self.check_record.lock().map(|mut rec| {
                        rec.set_verdict(event_record);
                    });
                }
                _ => (),
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {
        let record = match self.check_record.lock() {
            Ok(record) => record,
            Err(_) => return,
        };
        if let (Ok(json), Ok(mut file)) =
            (serde_json::to_string_pretty(&*record), self.log_file.lock())
        {
            let _ = writeln!(file, "{}", json);
        }
    }
}

/// Log information associated to a validity check: the argument, the assignments that were
/// evaluated and the verdict.
#[derive(Serialize)]
struct CheckRecord {
    argument: Option<String>,
    evaluations: Vec<EvaluateRecord>,
    verdict: Option<String>,
    visited: Option<u64>,
    counterexample: Option<String>,
}

impl CheckRecord {
    fn new() -> Self {
        Self {
            argument: None,
            evaluations: Vec::new(),
            verdict: None,
            visited: None,
            counterexample: None,
        }
    }

    /// Set the verdict of the check, triggered by VALID and INVALID events.
    fn set_verdict(&mut self, value: Recorder) {
        self.verdict = value.event.map(|e| e.trim_start_matches('@').to_owned());
        self.visited = value.visited;
        self.counterexample = value.counterexample;
    }
}

/// A record, containing an assignment and the truth value of the conclusion under it.
#[derive(Serialize, Deserialize)]
struct EvaluateRecord {
    index: u64,
    assignment: String,
    conclusion: bool,
}

impl EvaluateRecord {
    fn try_from(value: Recorder) -> Option<Self> {
        Some(EvaluateRecord {
            index: value.index?,
            assignment: value.assignment?,
            conclusion: value.conclusion?,
        })
    }
}

/// Generic trace visitor to collect as many fields as it can. Based on the triggering event,
/// `Recorder` will be converted to its corresponding log record.
struct Recorder {
    event: Option<String>,
    argument: Option<String>,
    visited: Option<u64>,
    counterexample: Option<String>,
    index: Option<u64>,
    assignment: Option<String>,
    conclusion: Option<bool>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            argument: None,
            visited: None,
            counterexample: None,
            index: None,
            assignment: None,
            conclusion: None,
        }
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::VISITED_FIELD => self.visited = Some(value),
            super::INDEX_FIELD => self.index = Some(value),
            _ => (),
        }
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        if field.name() == super::CONCLUSION_FIELD {
            self.conclusion = Some(value);
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::ARGUMENT_FIELD => self.argument = Some(format!("{:?}", value)),
            super::COUNTEREXAMPLE_FIELD => self.counterexample = Some(format!("{:?}", value)),
            super::ASSIGNMENT_FIELD => self.assignment = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use serde_json::Value;
    use std::{fs, path::PathBuf};

    fn log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("validity-prop-{}-{}.json", name, std::process::id()))
    }

    fn check_with_log(name: &str, premises: &[&str], conclusion: &str) -> Value {
        let path = log_path(name);
        let argument = Parser::default()
            .parse_argument(premises, conclusion)
            .unwrap();
        let logger = JsonLogger::new(File::create(&path).unwrap());
        tracing::subscriber::with_default(logger, || argument.check());

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    #[test]
    fn test_log_invalid() {
        let record = check_with_log("invalid", &["P>Q"], "Q>P");
        assert_eq!("P → Q\n∴ Q → P", record["argument"]);
        assert_eq!("invalid", record["verdict"]);
        assert_eq!(2, record["visited"]);
        assert_eq!("{P: false, Q: true}", record["counterexample"]);

        let evaluations = record["evaluations"].as_array().unwrap();
        assert_eq!(2, evaluations.len());
        assert_eq!(0, evaluations[0]["index"]);
        assert_eq!("{P: true, Q: true}", evaluations[0]["assignment"]);
        assert_eq!(true, evaluations[0]["conclusion"]);
        assert_eq!(false, evaluations[1]["conclusion"]);
    }

    #[test]
    fn test_log_valid() {
        let record = check_with_log("valid", &["P|Q", "~P"], "Q");
        assert_eq!("valid", record["verdict"]);
        assert_eq!(4, record["visited"]);
        assert_eq!(Value::Null, record["counterexample"]);
        assert_eq!(4, record["evaluations"].as_array().unwrap().len());
    }
}
