//! Shared fixtures for the integration tests.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use tokio::net::TcpSocket;

/// A loopback listener that accepts and immediately drops every connection.
pub struct AcceptingListener {
    pub addr: SocketAddr,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AcceptingListener {
    pub fn spawn() -> anyhow::Result<Self> {
        Self::spawn_on(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    pub fn spawn_on(ip: IpAddr) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(SocketAddr::new(ip, 0))?;
        let addr = listener.local_addr()?;
        let running = Arc::new(AtomicBool::new(true));

        let flag = running.clone();
        let handle = thread::spawn(move || {
            for stream in listener.incoming() {
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                drop(stream);
            }
        });

        Ok(Self {
            addr,
            running,
            handle: Some(handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

impl Drop for AcceptingListener {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        // Wake the accept loop so it sees the flag.
        let _ = std::net::TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A loopback port that is bound but never listened on.
///
/// Connections to it are refused, and nothing else can take the port while this
/// value is alive.
pub struct ClosedPort {
    _socket: TcpSocket,
    pub port: u16,
}

pub fn closed_port() -> anyhow::Result<ClosedPort> {
    let socket = TcpSocket::new_v4()?;
    socket.bind(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0))?;
    let port = socket.local_addr()?.port();
    Ok(ClosedPort {
        _socket: socket,
        port,
    })
}

/// Number of descriptors this process has open.
#[cfg(target_os = "linux")]
pub fn open_descriptors() -> anyhow::Result<usize> {
    Ok(std::fs::read_dir("/proc/self/fd")?.count())
}
