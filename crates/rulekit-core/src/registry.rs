//! The static technology registry.
//!
//! Each entry ties indicator patterns (dependency names as they appear in a
//! manifest) to the rule documents that should be surfaced when the
//! technology is present. Priority is a display hint only.

use crate::technology::{Pattern, Priority, Technology};

// ---------------------------------------------------------------------------
// Helper macro for concise registry entries
// ---------------------------------------------------------------------------

macro_rules! tech {
    (
        id: $id:expr,
        label: $label:expr,
        priority: $priority:expr,
        patterns: [$($pattern:expr),+ $(,)?],
        documents: [$($doc:expr),+ $(,)?]
    ) => {
        Technology {
            id: $id,
            label: $label,
            priority: $priority,
            patterns: vec![$(Pattern::parse($pattern)),+],
            documents: vec![$($doc),+],
        }
    };
}

// ---------------------------------------------------------------------------
// Default registry
// ---------------------------------------------------------------------------

pub fn default_registry() -> Vec<Technology> {
    vec![
        tech! {
            id: "react",
            label: "React",
            priority: Priority::High,
            patterns: ["react", "react-dom"],
            documents: ["react"]
        },
        tech! {
            id: "react-router",
            label: "React Router",
            priority: Priority::High,
            patterns: ["react-router", "react-router-dom", "@react-router/*"],
            documents: ["react-router"]
        },
        tech! {
            id: "nextjs",
            label: "Next.js",
            priority: Priority::High,
            patterns: ["next"],
            documents: ["nextjs", "react"]
        },
        tech! {
            id: "tailwindcss",
            label: "Tailwind CSS",
            priority: Priority::High,
            patterns: ["tailwindcss", "@tailwindcss/*"],
            documents: ["tailwindcss"]
        },
        tech! {
            id: "shadcn",
            label: "shadcn/ui component library",
            priority: Priority::Medium,
            patterns: ["@radix-ui/*", "class-variance-authority", "cmdk", "vaul"],
            documents: ["shadcn-ui"]
        },
        tech! {
            id: "typescript",
            label: "TypeScript",
            priority: Priority::Medium,
            patterns: ["typescript"],
            documents: ["typescript"]
        },
        tech! {
            id: "vite",
            label: "Vite",
            priority: Priority::Medium,
            patterns: ["vite", "@vitejs/*"],
            documents: ["vite"]
        },
        tech! {
            id: "supabase",
            label: "Supabase",
            priority: Priority::Medium,
            patterns: ["@supabase/*"],
            documents: ["supabase", "security"]
        },
        tech! {
            id: "trpc",
            label: "tRPC",
            priority: Priority::Medium,
            patterns: ["@trpc/*"],
            documents: ["trpc", "typescript"]
        },
        tech! {
            id: "prisma",
            label: "Prisma ORM",
            priority: Priority::Medium,
            patterns: ["prisma", "@prisma/client"],
            documents: ["prisma"]
        },
        tech! {
            id: "drizzle",
            label: "Drizzle ORM",
            priority: Priority::Medium,
            patterns: ["drizzle-orm", "drizzle-kit"],
            documents: ["drizzle"]
        },
        tech! {
            id: "zod",
            label: "Zod",
            priority: Priority::Low,
            patterns: ["zod"],
            documents: ["zod"]
        },
        tech! {
            id: "zustand",
            label: "Zustand",
            priority: Priority::Low,
            patterns: ["zustand"],
            documents: ["zustand"]
        },
        tech! {
            id: "vitest",
            label: "Vitest",
            priority: Priority::Low,
            patterns: ["vitest", "@vitest/*"],
            documents: ["vitest"]
        },
    ]
}

/// Look up a registry entry by id.
pub fn find<'a>(registry: &'a [Technology], id: &str) -> Option<&'a Technology> {
    registry.iter().find(|t| t.id == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn ids_are_unique() {
        let registry = default_registry();
        let ids: BTreeSet<_> = registry.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn ids_and_documents_are_valid_slugs() {
        for tech in default_registry() {
            crate::paths::validate_doc_id(tech.id)
                .unwrap_or_else(|_| panic!("bad technology id: {}", tech.id));
            for doc in &tech.documents {
                crate::paths::validate_doc_id(doc)
                    .unwrap_or_else(|_| panic!("bad document id: {doc}"));
            }
        }
    }

    #[test]
    fn every_entry_has_patterns_and_documents() {
        for tech in default_registry() {
            assert!(!tech.patterns.is_empty(), "{} has no patterns", tech.id);
            assert!(!tech.documents.is_empty(), "{} has no documents", tech.id);
        }
    }

    #[test]
    fn find_by_id() {
        let registry = default_registry();
        assert_eq!(find(&registry, "tailwindcss").unwrap().label, "Tailwind CSS");
        assert!(find(&registry, "unknown").is_none());
    }
}
