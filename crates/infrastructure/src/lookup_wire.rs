//! Fact stream spoken on the distribution socket.
//!
//! Records are concatenated back to back with no outer framing:
//! `[u8 N][N bytes domain][u8 M][M bytes address]`, `M` being 4 or 16.

use bytes::{BufMut, BytesMut};
use dnstap_fanout_domain::{DomainError, Fact};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tokio::io::{AsyncRead, AsyncReadExt};

pub const MAX_DOMAIN_LEN: usize = u8::MAX as usize;

const IPV4_LEN: u8 = 4;
const IPV6_LEN: u8 = 16;

/// Appends one record to `buf`. Nothing is written when the domain does not fit.
pub fn encode_fact(fact: &Fact, buf: &mut BytesMut) -> Result<(), DomainError> {
    let domain = fact.domain().as_bytes();
    let domain_len =
        u8::try_from(domain.len()).map_err(|_| DomainError::FactTooLong(domain.len()))?;

    buf.reserve(2 + domain.len() + IPV6_LEN as usize);
    buf.put_u8(domain_len);
    buf.put_slice(domain);

    match fact.address {
        IpAddr::V4(v4) => {
            buf.put_u8(IPV4_LEN);
            buf.put_slice(&v4.octets());
        }
        IpAddr::V6(v6) => {
            buf.put_u8(IPV6_LEN);
            buf.put_slice(&v6.octets());
        }
    }

    Ok(())
}

pub fn encode(fact: &Fact) -> Result<Vec<u8>, DomainError> {
    let mut buf = BytesMut::new();
    encode_fact(fact, &mut buf)?;
    Ok(buf.to_vec())
}

/// Reads one record, waiting until all of it has arrived.
pub async fn read_fact<R>(reader: &mut R) -> Result<Fact, DomainError>
where
    R: AsyncRead + Unpin,
{
    let domain_len = reader.read_u8().await?;
    let mut domain = vec![0u8; domain_len as usize];
    reader.read_exact(&mut domain).await?;

    let domain = String::from_utf8(domain)
        .map_err(|e| DomainError::TapDecode(format!("domain is not valid UTF-8: {}", e)))?;

    let address = match reader.read_u8().await? {
        IPV4_LEN => {
            let mut octets = [0u8; 4];
            reader.read_exact(&mut octets).await?;
            IpAddr::V4(Ipv4Addr::from(octets))
        }
        IPV6_LEN => {
            let mut octets = [0u8; 16];
            reader.read_exact(&mut octets).await?;
            IpAddr::V6(Ipv6Addr::from(octets))
        }
        other => {
            return Err(DomainError::TapDecode(format!(
                "unsupported address length {}",
                other
            )))
        }
    };

    Ok(Fact::new(domain, address))
}
