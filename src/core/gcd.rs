use crate::domain::model::Operands;
use crate::domain::ports::{Console, Demo};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};

/// Greatest common divisor by iterative Euclidean reduction.
///
/// Operands are reduced to their absolute values first, so the result is never
/// negative: `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. The result is unsigned
/// because `|i64::MIN|` does not fit in an `i64`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Parse the first two whitespace-separated integers of `text`.
pub fn parse_operands(text: &str) -> Result<Operands> {
    let mut tokens = text.split_ascii_whitespace();
    let a = parse_operand(tokens.next(), "first")?;
    let b = parse_operand(tokens.next(), "second")?;

    let extra = tokens.count();
    if extra > 0 {
        tracing::debug!("Ignoring {} extra token(s) after the operands", extra);
    }

    Ok(Operands { a, b })
}

fn parse_operand(token: Option<&str>, position: &str) -> Result<i64> {
    let token = token.ok_or_else(|| {
        DemoError::malformed(format!(
            "expected two integers, the {} operand is missing",
            position
        ))
    })?;

    token.parse::<i64>().map_err(|e| {
        DemoError::malformed(format!("'{}' is not a valid integer: {}", token, e))
    })
}

/// Read lines from `input` until two tokens are available (or the stream
/// ends), then parse them. Nothing past the line holding the second operand is
/// consumed from the caller's point of view.
pub async fn read_operands<R>(input: R) -> Result<Operands>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(input);
    let mut collected = String::new();
    let mut line = String::new();

    while collected.split_ascii_whitespace().count() < 2 {
        line.clear();
        let read = reader.read_line(&mut line).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                DemoError::malformed("standard input is not valid UTF-8")
            } else {
                DemoError::IoError(e)
            }
        })?;
        if read == 0 {
            break;
        }
        collected.push_str(&line);
        collected.push(' ');
    }

    parse_operands(&collected)
}

/// Reads two integers from the console and prints their GCD on its own line.
pub struct GcdDemo;

#[async_trait]
impl Demo for GcdDemo {
    fn name(&self) -> &'static str {
        "gcd"
    }

    async fn run(&self, console: &mut Console<'_>) -> Result<()> {
        let operands = read_operands(&mut *console.input).await?;
        let result = gcd(operands.a, operands.b);
        tracing::debug!("gcd({}, {}) = {}", operands.a, operands.b, result);

        console
            .output
            .write_all(format!("{}\n", result).as_bytes())
            .await?;
        Ok(())
    }
}
