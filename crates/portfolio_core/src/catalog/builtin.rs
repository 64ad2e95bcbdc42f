//! Built-in portfolio dataset.
//!
//! # Responsibility
//! - Declare the static project records and published category list.
//! - Expose one shared, validated catalog instance per process.
//!
//! # Invariants
//! - Declaration order here is the display order everywhere.
//! - The dataset must satisfy [`Catalog::new`] validation; this is covered
//!   by an integration test.

use crate::catalog::Catalog;
use crate::model::{Project, ProjectStatus};
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(builtin_projects(), builtin_categories())
        .expect("built-in catalog data must be valid")
});

impl Catalog {
    /// Shared catalog built from the static dataset below.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

/// Category labels published in the filter UI, in display order.
pub fn builtin_categories() -> Vec<String> {
    [
        "Featured",
        "Mobile Apps",
        "Machine Learning",
        "Cloud",
        "Desktop Apps",
        "Web Apps",
        "Unix Programming",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

struct Links {
    demo: Option<&'static str>,
    github: Option<&'static str>,
    featured: bool,
}

fn github(url: &'static str) -> Links {
    Links {
        demo: None,
        github: Some(url),
        featured: false,
    }
}

fn record(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    technologies: &[&str],
    image_stem: &str,
    year: &str,
    links: Links,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: format!("/images/projects/{image_stem}.png"),
        demo_url: links.demo.map(str::to_string),
        github_url: links.github.map(str::to_string),
        featured: links.featured,
        year: year.to_string(),
        status: ProjectStatus::Completed,
    }
}

/// The full record list, in display order.
pub fn builtin_projects() -> Vec<Project> {
    vec![
        record(
            "chowhub",
            "ChowHub - Restaurant Management System",
            "Led a team of 4 developers to build a comprehensive full-stack restaurant \
             management system with real-time analytics, AI insights, and multi-restaurant \
             support.",
            "Web Apps",
            &[
                "Next.js",
                "React",
                "Node.js",
                "Express.js",
                "MongoDB",
                "JWT",
                "AI Integration",
            ],
            "chowhub",
            "2025",
            Links {
                demo: Some("https://chowhub.vercel.app/"),
                github: Some("https://github.com/most4f4/chowhub"),
                featured: true,
            },
        ),
        record(
            "bookworm",
            "Bookworm",
            "A community-driven book sharing mobile app built with React Native and Expo. \
             Combines personal book tracking with community sharing through mapped book \
             exchange locations.",
            "Mobile Apps",
            &[
                "React Native",
                "Expo",
                "TypeScript",
                "Supabase",
                "Google Books API",
            ],
            "bookworm",
            "2025",
            github("https://github.com/most4f4/bookworm"),
        ),
        record(
            "sports-motion-detection",
            "Sports Motion Detection & Viewport Tracking",
            "A Python-based motion detection and viewport tracking system that simulates a \
             \"virtual camera\" for sports video analysis using computer vision techniques.",
            "Machine Learning",
            &["Python", "OpenCV", "NumPy", "Computer Vision"],
            "sports-motion",
            "2025",
            Links {
                demo: None,
                github: Some("https://github.com/most4f4/Sports_Motion_Detection"),
                featured: true,
            },
        ),
        record(
            "clouddocs",
            "CloudDocs - Cloud-Native Document Management",
            "Full-stack cloud-native application with React frontend and Node.js \
             microservices backend. Features AWS Cognito authentication, S3 storage, \
             DynamoDB, ECR/Fargate deployment, and real-time document conversion.",
            "Cloud",
            &[
                "Next.js",
                "React",
                "Node.js",
                "AWS Cognito",
                "AWS S3",
                "DynamoDB",
                "Docker",
                "ECR/Fargate",
            ],
            "clouddocs",
            "2025",
            Links {
                demo: Some("https://clouddocs.vercel.app/"),
                github: Some("https://github.com/most4f4/fragments-ui"),
                featured: true,
            },
        ),
        record(
            "hotel-reservation",
            "Hotel Reservation Management System",
            "A JavaFX desktop application designed to simplify hotel operations including \
             room booking, guest data management, and administrative oversight.",
            "Desktop Apps",
            &["Java", "JavaFX", "SQLite", "JDBC", "Maven"],
            "hotel-reservation",
            "2025",
            github("https://github.com/most4f4/Hotel-Reservation-Management-System-"),
        ),
        record(
            "inventory-management",
            "Inventory Management System",
            "A comprehensive JavaFX-based desktop application for managing inventory parts \
             and products with persistent data storage capabilities.",
            "Desktop Apps",
            &["Java", "JavaFX", "SQLite", "Maven"],
            "inventory-management",
            "2025",
            github("https://github.com/most4f4/Inventory_Management_System"),
        ),
        record(
            "auto-loan-calculator",
            "Auto Loan Calculator",
            "A comprehensive JavaFX-based desktop application for calculating auto loan \
             payments with detailed amortization schedules and loan management features.",
            "Desktop Apps",
            &["Java", "JavaFX", "FXML", "Maven"],
            "auto-loan",
            "2025",
            github("https://github.com/most4f4/Auto-Loan-Calculator"),
        ),
        record(
            "cuisine-crafters",
            "Cuisine Crafters",
            "A comprehensive meal kit delivery platform built with Node.js, Express, and \
             MongoDB. Provides a seamless experience for customers to browse and order \
             fresh meal kits.",
            "Web Apps",
            &["Node.js", "Express", "MongoDB", "EJS", "Bootstrap"],
            "cuisine-crafters",
            "2024",
            Links {
                demo: Some("https://cuisinecrafters.onrender.com/"),
                github: Some("https://github.com/most4f4/CuisineCrafters"),
                featured: false,
            },
        ),
        record(
            "udp-logging-system",
            "Embedded Distributed Logging System",
            "A real-time distributed logging system using UDP socket communication, \
             multithreading, and asynchronous I/O with advanced network programming \
             concepts.",
            "Unix Programming",
            &["C++", "UDP Sockets", "Multithreading", "Linux"],
            "udp-logging",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/01-%20Embedded%20Logging%20System%20-%20UDP%20Asynchornous%20Socket%20communication",
            ),
        ),
        record(
            "shared-memory-ipc",
            "Shared Memory & Semaphore IPC System",
            "Advanced Inter-Process Communication using System V Shared Memory and POSIX \
             Named Semaphores to enable synchronized message exchange between multiple \
             client processes.",
            "Unix Programming",
            &["C", "System V IPC", "POSIX Semaphores", "Linux"],
            "shared-memory",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/02-%20Shared%20Memory%20and%20Semaphore%20-%20IPC%20Multiple%20Clients",
            ),
        ),
        record(
            "socket-server-client",
            "Multi-threaded Socket Server-Client",
            "A high-performance multi-threaded TCP server with asynchronous client \
             handling, mutex-protected shared resources, and timeout-based connection \
             management.",
            "Unix Programming",
            &["C++", "TCP Sockets", "Multithreading", "Mutex", "Linux"],
            "socket-server",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/03-%20Multi-threaded%20Socket%20Server%20Client%20-%20IPC%2C%20Async%2C%20Mutex%2C%20Timeout%2C",
            ),
        ),
        record(
            "message-queue-system",
            "Message Queue Server-Client System",
            "A multi-threaded message queue communication system using System V Message \
             Queues, POSIX threads, and mutex synchronization.",
            "Unix Programming",
            &["C++", "Message Queues", "POSIX Threads", "Mutex", "Linux"],
            "message-queue",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/04-%20Message%20Queue%20Server%20Client%20-%20Multi%20threading%2C%20Mutex",
            ),
        ),
        record(
            "unix-pipe-programming",
            "Unix Pipe Programming - IPC System",
            "A Unix shell pipeline simulator demonstrating advanced Inter-Process \
             Communication using anonymous pipes, process forking, I/O redirection, and \
             command execution.",
            "Unix Programming",
            &["C", "Unix Pipes", "Fork/Exec", "I/O Redirection", "Linux"],
            "unix-pipes",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/05-%20Pipe%20Programming%20-%20IPC%2C%20Fork%2C%20Strtok%2C%20Execlp%2C%20Dup2",
            ),
        ),
        record(
            "unix-domain-socket",
            "Unix Domain Socket Client-Server",
            "Advanced Inter-Process Communication using Unix Domain Sockets with \
             SOCK_STREAM semantics for reliable, high-performance local communication.",
            "Unix Programming",
            &["C", "Unix Domain Sockets", "IPC", "Linux"],
            "unix-domain-socket",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/06-%20IPC%20-%20Unix%20Domain%20Socket%20Client-Server%20Demo",
            ),
        ),
        record(
            "network-monitor-system",
            "Network Monitor System",
            "A distributed network interface monitoring system using advanced IPC, Unix \
             domain sockets, process forking, and real-time file system monitoring.",
            "Unix Programming",
            &["C++", "Unix Sockets", "Fork", "Select", "File Locking", "Linux"],
            "network-monitor",
            "2024",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/07-%20Network%20Monitor%20System%20-%20IPC%2C%20Socket%2C%20Fork%2C%20Select%2C%20WLock%2C%20Ifstream",
            ),
        ),
        record(
            "signal-based-monitor",
            "Signal-Based System Monitor",
            "A signal-driven system monitoring architecture using Unix signals for \
             inter-process communication, fork/exec process management, and real-time \
             network interface monitoring.",
            "Unix Programming",
            &["C++", "Unix Signals", "Fork/Exec", "IPC", "Linux"],
            "signal-monitor",
            "2025",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/08-%20Signal-Based%20System%20Monitor%20-%20Advanced%20Process%20Control%20%26%20IPC",
            ),
        ),
        record(
            "linux-kernel-module",
            "Linux Kernel Module - Device Driver",
            "A Linux kernel module that simulates a hardware device driver using character \
             device interface, kernel threading, ioctl system calls, and kernel-userspace \
             communication.",
            "Unix Programming",
            &["C", "Linux Kernel", "Device Drivers", "ioctl", "Kernel Threading"],
            "kernel-module",
            "2025",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/09-%20Linux%20Kernel%20Module%20-%20Hardware%20Device%20Driver",
            ),
        ),
        record(
            "ioctl-framebuffer",
            "ioctl Framebuffer Control System",
            "Low-level hardware interaction using ioctl system calls to communicate with \
             the Linux framebuffer device for retrieving graphics hardware information.",
            "Unix Programming",
            &["C++", "ioctl", "Linux Framebuffer", "Hardware Interface"],
            "framebuffer",
            "2025",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/10%20-%20ioctl%20Framebuffer%20Control%20System",
            ),
        ),
        record(
            "network-interface-info",
            "Network Interface Information Retrieval",
            "A comprehensive network interface inspection tool using ioctl system calls \
             and socket-based communication to retrieve detailed network configuration \
             information.",
            "Unix Programming",
            &["C++", "ioctl", "Socket Programming", "Network Interface", "Linux"],
            "network-interface",
            "2025",
            github(
                "https://github.com/most4f4/Unix-programming/tree/main/11-%20Network%20Interface%20Information%20Retrieval%20Program%20-%20Socket%2C%20Ioctl",
            ),
        ),
    ]
}
