use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use rand::Rng;

use super::SamplingError;

/// Sample one address uniformly from a CIDR block and return its canonical
/// textual form.
///
/// For IPv4 blocks with more than two addresses the network and broadcast
/// addresses are excluded. IPv6 blocks and degenerate IPv4 blocks (/31, /32)
/// sample the full range including boundaries. Host bits in the input are
/// masked off rather than rejected.
pub fn ip_from_cidr(rng: &mut impl Rng, cidr: &str) -> Result<String, SamplingError> {
    let (addr, prefix) = parse_cidr(cidr)?;

    match addr {
        IpAddr::V4(v4) => {
            let host_bits = 32 - prefix;
            let mask = if host_bits == 32 { 0 } else { u32::MAX << host_bits };
            let network = u32::from(v4) & mask;
            let broadcast = network | !mask;

            let (first, last) = if host_bits >= 2 {
                (network + 1, broadcast - 1)
            } else {
                (network, broadcast)
            };
            let drawn = rng.gen_range(first..=last);
            Ok(Ipv4Addr::from(drawn).to_string())
        }
        IpAddr::V6(v6) => {
            let host_bits = 128 - u32::from(prefix);
            let mask = if host_bits == 128 {
                0
            } else {
                u128::MAX << host_bits
            };
            let network = u128::from(v6) & mask;
            let last = network | !mask;

            let drawn = rng.gen_range(network..=last);
            Ok(Ipv6Addr::from(drawn).to_string())
        }
    }
}

fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8), SamplingError> {
    let invalid = |reason: &str| SamplingError::InvalidNetwork {
        cidr: cidr.to_string(),
        reason: reason.to_string(),
    };

    let (addr_part, prefix_part) = cidr
        .split_once('/')
        .ok_or_else(|| invalid("missing '/' prefix separator"))?;

    let addr: IpAddr = addr_part
        .parse()
        .map_err(|_| invalid("unparseable address"))?;
    let prefix: u8 = prefix_part
        .parse()
        .map_err(|_| invalid("unparseable prefix length"))?;

    let max_prefix = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    if prefix > max_prefix {
        return Err(invalid("prefix length out of range"));
    }

    Ok((addr, prefix))
}
