//! GF(2^8) multiplication tables, as used to hand-check MixColumns.

use toyaes_crypto::aes::gf256::mul;

/// The MixColumns and InvMixColumns coefficients.
const DEFAULT_COEFFS: [u8; 6] = [0x02, 0x03, 0x0e, 0x0b, 0x0d, 0x09];

const VALUES_PER_LINE: usize = 10;

pub fn run(coeffs: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let coeffs = if coeffs.is_empty() {
        DEFAULT_COEFFS.to_vec()
    } else {
        coeffs
            .iter()
            .map(|c| {
                let digits = c.trim_start_matches("0x").trim_start_matches("0X");
                u8::from_str_radix(digits, 16)
                    .map_err(|_| format!("invalid coefficient '{c}': expected one hex byte"))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    for coeff in coeffs {
        print!("{}", render(coeff));
    }
    Ok(())
}

/// The products `coeff * i` for every byte `i`, headed by the coefficient.
fn render(coeff: u8) -> String {
    let mut out = format!("0x{coeff:02X}\n");
    for i in 0..=255u8 {
        out.push_str(&format!("0x{:02X},", mul(coeff, i)));
        if i as usize % VALUES_PER_LINE == VALUES_PER_LINE - 1 {
            out.push('\n');
        }
    }
    out.push_str("\n\n");
    out
}
