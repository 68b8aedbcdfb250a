//! Key schedule dump command.

use toyaes_crypto::aes::key_expansion;
use zeroize::Zeroizing;

use crate::hex;

pub fn run(key_hex: &str) -> Result<(), Box<dyn std::error::Error>> {
    let key = Zeroizing::new(hex::decode(key_hex)?);
    for line in render(&key)? {
        println!("{line}");
    }
    Ok(())
}

/// One line per round key: `round NN: wwwwwwww wwwwwwww wwwwwwww wwwwwwww`.
fn render(key: &[u8]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let words = Zeroizing::new(key_expansion(key)?);
    Ok(words
        .chunks(4)
        .enumerate()
        .map(|(round, ws)| {
            let ws: Vec<String> = ws.iter().map(|w| format!("{w:08x}")).collect();
            format!("round {round:2}: {}", ws.join(" "))
        })
        .collect())
}
