//! Reads a batch, decides every message and writes the result line.

use crate::config::Config;
use crate::error::Error;
use crate::filter::process;
use crate::input::parse_batch;
use crate::output::format_decisions;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Runs one batch from `reader` to `writer`.
///
/// Nothing is written unless the whole input parses.
pub async fn run_batch<R, W>(mut reader: R, mut writer: W, config: &Config) -> Result<(), Error>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = String::new();
    reader.read_to_string(&mut input).await?;
    log::debug!("Read {} bytes of input", input.len());

    let batch = parse_batch(&input, config)?;
    let decisions = process(&batch.timestamps, &batch.messages, batch.window);

    writer
        .write_all(format_decisions(&decisions).as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[tokio::test]
    async fn test_run_example() -> TestResult {
        let input = "6\n1 4 5 10 11 14\nhello bye bye hello bye hello\n5\n";
        let mut output = Vec::new();
        run_batch(input.as_bytes(), &mut output, &Config::default()).await?;
        assert_eq!(String::from_utf8(output)?, "true true false true true false\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_run_empty_batch() -> TestResult {
        let mut output = Vec::new();
        run_batch("0\n0\n".as_bytes(), &mut output, &Config::default()).await?;
        assert_eq!(String::from_utf8(output)?, "\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_run_twice_gives_same_output() -> TestResult {
        let input = "4 1 1 2 3 a a a b 1";
        let mut first = Vec::new();
        let mut second = Vec::new();
        run_batch(input.as_bytes(), &mut first, &Config::default()).await?;
        run_batch(input.as_bytes(), &mut second, &Config::default()).await?;
        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first)?, "true false false true\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_input_writes_nothing() {
        let mut output = Vec::new();
        let result = run_batch("3 1 2".as_bytes(), &mut output, &Config::default()).await;
        assert!(matches!(result, Err(Error::UnexpectedEof { .. })));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_io_error() {
        let mut output = Vec::new();
        let input: &[u8] = &[b'1', b' ', 0xff, 0xfe];
        let result = run_batch(input, &mut output, &Config::default()).await;
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(output.is_empty());
    }
}
