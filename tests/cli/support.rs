use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for parcelbook
pub fn parcelbook() -> Command {
    cargo_bin_cmd!("parcelbook")
}

/// Four parcels in two regions; listed order is #3, #4, #2, #1
pub const DATASET: &str = "\
number,cadastral_number,region,article,area_ha,price_per_sotka_rub,price_per_plot_rub,recommended_usage,context,cadastral_number_raw
2,04:05:010101:12,Республика Алтай,A-2,\"2,5\",40000,\"1,000\",\"1; 3\",Рядом река,
1,04:05:010101:11,Республика Алтай,A-1,10,5000,900,,Лес,
1,03:01:000001:5,Бурятия,B-1,1,,1500000,,,
,03:01:000001:6; 03:01:000001:7,Бурятия,B-2,,,,,,03:01:000001:6 / 03:01:000001:7
";

const ENV_VARS: &[&str] = &[
    "PARCELBOOK_DATASET",
    "PARCELBOOK_NOTES_URL",
    "PARCELBOOK_NOTES_FILE",
    "PARCELBOOK_AI_URL",
    "PARCELBOOK_AI_TIMEOUT",
    "PARCELBOOK_LOG",
];

/// `n` parcels in one region, numbered 1..=n
pub fn many_parcels(n: usize) -> String {
    let mut csv = String::from("number,cadastral_number,region,article\n");
    for i in 1..=n {
        csv.push_str(&format!("{},04:01:1:{},Алтай,A-{}\n", i, i, i));
    }
    csv
}

/// A temp directory holding a dataset and a `parcelbook.toml`
pub struct Catalog {
    dir: TempDir,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_dataset(DATASET)
    }

    pub fn with_dataset(csv: &str) -> Self {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("dataset.csv"), csv).unwrap();

        let mut notes = toml::Table::new();
        notes.insert("file".into(), "data/notes.json".into());
        let mut config = toml::Table::new();
        config.insert("dataset".into(), "dataset.csv".into());
        config.insert("notes".into(), toml::Value::Table(notes));
        fs::write(dir.path().join("parcelbook.toml"), config.to_string()).unwrap();

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn notes_path(&self) -> PathBuf {
        self.dir.path().join("data").join("notes.json")
    }

    pub fn write_notes(&self, json: &str) {
        let path = self.notes_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
    }

    pub fn read_notes(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.notes_path()).unwrap()).unwrap()
    }

    /// Command running inside the catalog directory with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = parcelbook();
        cmd.current_dir(self.dir.path());
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

/// Request seen by [`respond_once`]
pub struct Captured {
    pub request_line: String,
    pub body: String,
}

/// Serve exactly one HTTP request; returns the base URL and the captured request
pub fn respond_once(status: u16, body: &str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 {
                break;
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().ok();

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            body: String::from_utf8_lossy(&request_body).into_owned(),
        })
        .ok();
    });

    (format!("http://{}", addr), rx)
}

/// Base URL on which nothing listens
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
