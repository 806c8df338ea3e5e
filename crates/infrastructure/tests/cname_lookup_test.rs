//! HickoryCnameLookup against a local UDP nameserver.

use cloudns_dns01_application::ports::CnameLookup;
use cloudns_dns01_domain::Nameserver;
use cloudns_dns01_infrastructure::HickoryCnameLookup;
use hickory_resolver::proto::op::{Message, MessageType, ResponseCode};
use hickory_resolver::proto::rr::rdata::CNAME;
use hickory_resolver::proto::rr::{Name, RData, Record};
use std::time::Duration;
use tokio::net::UdpSocket;

const DELEGATED: &str = "_acme-challenge.delegated.example.com.";
const NODATA: &str = "_acme-challenge.nodata.example.com.";

/// Answers CNAME queries: `DELEGATED` points at validate.other.com,
/// `NODATA` exists without records, everything else is NXDOMAIN.
async fn start_nameserver() -> Nameserver {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(query) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            if let Ok(bytes) = reply_to(&query).to_vec() {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });

    Nameserver::new(addr)
}

fn reply_to(query: &Message) -> Message {
    let mut reply = Message::new();
    reply
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(query.op_code())
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true)
        .add_queries(query.queries().to_vec());

    let Some(name) = query.queries().first().map(|q| q.name().clone()) else {
        reply.set_response_code(ResponseCode::FormErr);
        return reply;
    };

    match name.to_ascii().to_ascii_lowercase().as_str() {
        DELEGATED => {
            let target = Name::from_ascii("validate.other.com.").unwrap();
            reply.add_answer(Record::from_rdata(name, 60, RData::CNAME(CNAME(target))));
        }
        NODATA => {}
        _ => {
            reply.set_response_code(ResponseCode::NXDomain);
        }
    }

    reply
}

fn lookup() -> HickoryCnameLookup {
    HickoryCnameLookup::with_timeout(Duration::from_secs(2))
}

#[tokio::test]
async fn test_cname_answer_returns_normalized_target() {
    let nameserver = start_nameserver().await;

    let targets = lookup()
        .cname_targets("_acme-challenge.delegated.example.com", Some(nameserver))
        .await
        .unwrap();

    assert_eq!(targets, vec!["validate.other.com".to_string()]);
}

#[tokio::test]
async fn test_trailing_dot_in_query_name_is_accepted() {
    let nameserver = start_nameserver().await;

    let targets = lookup()
        .cname_targets(DELEGATED, Some(nameserver))
        .await
        .unwrap();

    assert_eq!(targets, vec!["validate.other.com".to_string()]);
}

#[tokio::test]
async fn test_nodata_ends_the_chain() {
    let nameserver = start_nameserver().await;

    let targets = lookup()
        .cname_targets("_acme-challenge.nodata.example.com", Some(nameserver))
        .await
        .unwrap();

    assert!(targets.is_empty());
}

#[tokio::test]
async fn test_nxdomain_ends_the_chain() {
    let nameserver = start_nameserver().await;

    let targets = lookup()
        .cname_targets("_acme-challenge.missing.example.com", Some(nameserver))
        .await
        .unwrap();

    assert!(targets.is_empty());
}

#[tokio::test]
async fn test_resolver_is_reused_per_nameserver() {
    let nameserver = start_nameserver().await;
    let lookup = lookup();

    let first = lookup
        .cname_targets("_acme-challenge.delegated.example.com", Some(nameserver))
        .await
        .unwrap();
    let second = lookup
        .cname_targets("_acme-challenge.nodata.example.com", Some(nameserver))
        .await
        .unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
