use gcd_fruits::{Console, DemoConfig, DemoError, DemoPath, LocalStorage, Session};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(fruits: Option<&str>, echo: Option<&[u8]>) -> Self {
        let dir = TempDir::new().unwrap();
        if let Some(fruits) = fruits {
            std::fs::write(dir.path().join("FruitList.txt"), fruits).unwrap();
        }
        if let Some(echo) = echo {
            std::fs::write(dir.path().join("copyme.txt"), echo).unwrap();
        }
        Self { dir }
    }

    fn session(&self) -> Session<LocalStorage> {
        let base = self.dir.path().to_str().unwrap().to_string();
        let config = DemoConfig::from_toml_str(&format!(
            "[resources]\nfruit_list = \"{}/FruitList.txt\"\n\n[echo]\nfile = \"copyme.txt\"\n",
            base.replace('\\', "/")
        ))
        .unwrap();
        Session::new(LocalStorage::new(base), &config)
    }
}

async fn run_path(
    session: &Session<LocalStorage>,
    path: DemoPath,
    stdin: &[u8],
) -> Result<String, DemoError> {
    let fruits = if path.prints_fruits() {
        Some(session.load_fruits().await?)
    } else {
        None
    };
    let runner = session.runner(path, fruits.as_ref())?;

    let mut input: &[u8] = stdin;
    let mut output: Vec<u8> = Vec::new();
    let mut console = Console::new(&mut input, &mut output);
    runner.run(&mut console).await?;

    Ok(String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_gcd_then_fruits() {
    let fixture = Fixture::new(Some("Apple\nBanana\nCherry"), None);
    let output = run_path(&fixture.session(), DemoPath::GcdThenFruits, b"48 18\n")
        .await
        .unwrap();

    assert_eq!(output, "6\nApple\nBanana\nCherry\n");
}

#[tokio::test]
async fn test_gcd_then_echo() {
    let fixture = Fixture::new(None, Some(b"line one\nline two"));
    let output = run_path(&fixture.session(), DemoPath::GcdThenEcho, b"100 100")
        .await
        .unwrap();

    assert_eq!(output, "100\nline one\nline two");
}

#[tokio::test]
async fn test_fruits_only_with_empty_resource() {
    let fixture = Fixture::new(Some(""), None);
    let output = run_path(&fixture.session(), DemoPath::Fruits, b"")
        .await
        .unwrap();

    assert_eq!(output, "");
}

#[tokio::test]
async fn test_gcd_only_with_zero_and_negative_operands() {
    let fixture = Fixture::new(None, None);
    let session = fixture.session();

    assert_eq!(run_path(&session, DemoPath::Gcd, b"0 5").await.unwrap(), "5\n");
    assert_eq!(run_path(&session, DemoPath::Gcd, b"0 0").await.unwrap(), "0\n");
    assert_eq!(run_path(&session, DemoPath::Gcd, b"-48 18").await.unwrap(), "6\n");
}

#[tokio::test]
async fn test_missing_fruit_list_fails_before_reading_input() {
    let fixture = Fixture::new(None, None);
    let err = run_path(&fixture.session(), DemoPath::GcdThenFruits, b"48 18\n")
        .await
        .unwrap_err();

    assert!(matches!(err, DemoError::MissingResource { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_malformed_input_is_reported() {
    let fixture = Fixture::new(Some("Apple\n"), None);
    let err = run_path(&fixture.session(), DemoPath::GcdThenFruits, b"forty-eight 18\n")
        .await
        .unwrap_err();

    assert!(matches!(err, DemoError::MalformedInput { .. }));
    assert!(err.user_friendly_message().contains("forty-eight"));
    assert_eq!(err.exit_code(), 1);
}
