//! The portfolio projects, as browsed from the "Projects" Finder window.

use super::tree::{Category, Detail, FileItem, SidebarSection};

pub(super) static SIDEBAR: &[SidebarSection] = &[
    SidebarSection {
        title: "Recent",
        labels: &["TomatoAgent", "Meaire", "BlogUploader", "VPModel", "Infra"],
    },
    SidebarSection {
        title: "Legacy",
        labels: &["Instagram", "MSG Guard", "Code Encryption", "Legacy Portfolio"],
    },
];

pub(super) static CATEGORIES: &[Category] = &[
    Category { key: "infra", items: INFRA },
    Category { key: "tomatoagent", items: TOMATO_AGENT },
    Category { key: "meaire", items: MEAIRE },
    Category { key: "bloguploader", items: BLOG_UPLOADER },
    Category { key: "vpmodel", items: VP_MODEL },
    Category { key: "instagram", items: INSTAGRAM },
    Category { key: "msgguard", items: MSG_GUARD },
    Category { key: "codeencryption", items: CODE_ENCRYPTION },
    Category { key: "legacyportfolio", items: LEGACY_PORTFOLIO },
];

// ── infra ─────────────────────────────────────────────────────────────────

static INFRA_DETAIL: Detail = Detail {
    id: "1-1",
    title: "HomeServer Infra",
    tech_stack: &["k8s", "argoCD", "docker", "network", "wsl2"],
    body: "\
![Kubernetes](https://joojae.com/content/images/2025/10/Kubernetes-Logo.png)
Services built and deployed on a home server.
A Synology NAS hosts the databases and a test server.
A Dell workstation with a GPU serves LLM workloads, with everything orchestrated by k8s.

## Architecture
- argoCD drives deployments from git
![oauth-proxy](https://miro.medium.com/v2/resize:fit:720/format:webp/1*JBVCjQGg7ydTreYFnNsUXQ.png)
oauth-proxy layout

## Features
- Reverse proxy with traefik
- Every service packaged with helm
- Private services gated by oauth-proxy
- TLS everywhere
- CI/CD through argoCD

## Running services
- This portfolio
- Markdown blog uploader (private)
- LLM training server (private)
- portainer (private)
- vllm FastAPI server
- traefik load-balancing reverse proxy

## Tech stack
- k8s
- docker
- portainer
- wsl2
- helm
- argoCD
- oauth-proxy (google provider)
- traefik
",
};

static INFRA: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&INFRA_DETAIL),
    FileItem::file("3", "2025-10-01.startDate"),
    FileItem::file("4", "still.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/localInfra"),
    FileItem::link(
        "6",
        "oauth-proxy middleware post",
        "https://odblog.vercel.app/posts/oauth-proxy-%EB%AF%B8%EB%93%A4%EC%9B%A8%EC%96%B4-%EA%B5%AC%EC%84%B1",
    ),
    FileItem::link("7", "argoCD setup post", "https://odblog.vercel.app/posts/CD-%EA%B5%AC%EC%84%B1"),
    FileItem::link(
        "8",
        "WSL2 external access post",
        "https://odblog.vercel.app/posts/wsl2%EC%99%80-%EC%99%B8%EB%B6%80%EC%A0%91%EC%86%8D-%EC%97%B0%EA%B2%B0%EB%B2%95",
    ),
];

// ── tomatoagent ───────────────────────────────────────────────────────────

static TOMATO_AGENT_DETAIL: Detail = Detail {
    id: "1-1",
    title: "TomatoAgent",
    tech_stack: &["Python", "LLM", "React", "FastAPI"],
    body: "\
![logo](https://github.com/Oldentomato/tomato_agent/raw/main/assets/logo.jpeg)

## Architecture
![architecture](https://github.com/Oldentomato/PortFolio_Next/blob/main/postsimg/post_1/img_1.png?raw=true)

## In action
![demo](https://github.com/Oldentomato/tomatoAgentApp/raw/main/readme/Animation4.gif?raw=true)
![demo](https://github.com/Oldentomato/tomatoAgentApp/raw/main/readme/Animation.gif?raw=true)

## Features
- Agent built directly on the OpenAI API (no langchain)
- FastAPI server with custom middleware
- Orchestration with docker-swarm
- Electron frontend

## Highlights
- ChatGPT as a desktop app
- Web search agent
- gptArchive agent: summarises saved code and URLs, then finds them again by embedding similarity instead of keywords

## Tech stack
- docker-swarm
- mysql
- redis
- fastAPI
- electron

## Troubleshooting
- Answers ignored the requested format
    Prompting alone gave inconsistent output. Rebuilt on the API's native agent support once it shipped; no malformed answers since.
- Conversation history loaded slowly
    Added a redis cache for active conversations, cleared on logout.
- FAISS cannot delete single embeddings
    Designed a key-based storage layout so individual entries can be stored and removed.
",
};

static TOMATO_AGENT: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&TOMATO_AGENT_DETAIL),
    FileItem::file("3", "2024-02-07.startDate"),
    FileItem::file("4", "2024-05-17.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/tomatoAgentApp"),
    FileItem::link(
        "6",
        "Server build log",
        "https://odblog.vercel.app/posts/tomatoAgent-Server-%EA%B5%AC%EC%84%B1%EA%B8%B0",
    ),
    FileItem::link("7", "gptArchive idea post", "https://odblog.vercel.app/posts/GPT-Archive"),
];

// ── meaire ────────────────────────────────────────────────────────────────

static MEAIRE_DETAIL: Detail = Detail {
    id: "1-1",
    title: "Meaire (SK Shieldus Rookies project)",
    tech_stack: &["Python", "AWS EKS", "k8s", "CI/CD"],
    body: "\
AWS EKS platform for the SK Shieldus Rookies final project.
Frontend, backend and an Airflow scheduler deployed on AWS with full CI/CD.

## Delivered
- terraform for the EKS cluster
- Service architecture design
- Separate internal and external ALBs
- AWS VPN for the internal ALB
- CI/CD with argoCD
- helm charts for every service

## Architecture
![aws infra](https://github.com/Oldentomato/astro-paper/blob/main/src/data/images/1760978291053-infra.png?raw=true)
- Dual ALB layout; the internal one is reachable only over VPN
- Deployed with terraform and ansible
- VPN link to an external GPU server

## Tech stack
- aws eks, ebs, efs, vpn, ecr
- terraform
- docker
- k8s

## Troubleshooting
- IAM dependency ordering broke the terraform apply
    Kept only the cluster in terraform and moved the rest to scripts, later to ansible.
- Developer tools such as kibana were exposed publicly
    Added an internal ALB behind a NAT gateway, reachable only through the VPN tunnel.
",
};

static MEAIRE: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&MEAIRE_DETAIL),
    FileItem::file("3", "2025-08-06.startDate"),
    FileItem::file("4", "2025-10-01.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/SSR3-FinalPj"),
    FileItem::link(
        "6",
        "Infrastructure post",
        "https://odblog.vercel.app/posts/EKS-%EC%9D%B8%ED%94%84%EB%9D%BC-%EA%B5%AC%EC%A1%B0",
    ),
    FileItem::link("7", "EKS CI/CD post", "https://odblog.vercel.app/posts/CD-%EA%B5%AC%EC%84%B1"),
    FileItem::link(
        "8",
        "AWS VPN tunnelling post",
        "https://odblog.vercel.app/posts/%EC%95%84%EB%A7%88%EC%A1%B4-vpn-%ED%84%B0%EB%84%90%EB%A7%81",
    ),
];

// ── bloguploader ──────────────────────────────────────────────────────────

static BLOG_UPLOADER_DETAIL: Detail = Detail {
    id: "1-1",
    title: "Markdown-Blog-Uploader",
    tech_stack: &["React", "k8s", "oauth-proxy"],
    body: "\
![screenshot](https://github.com/Oldentomato/markdown_blog_uploader/raw/main/assets/screenShot_1.png)
## Overview
> A Markdown upload system for a Next.js blog.
Posts preview in real time while typing.
Formatting buttons take care of Markdown syntax.
React frontend with an internal Express API for image uploads.
",
};

static BLOG_UPLOADER: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&BLOG_UPLOADER_DETAIL),
    FileItem::file("3", "2025-10-10.startDate"),
    FileItem::file("4", "2025-10-14.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/markdown_blog_uploader"),
    FileItem::link(
        "6",
        "oauth-proxy post",
        "https://odblog.vercel.app/posts/oauth-proxy-%EB%AF%B8%EB%93%A4%EC%9B%A8%EC%96%B4-%EA%B5%AC%EC%84%B1",
    ),
];

// ── vpmodel ───────────────────────────────────────────────────────────────

static VP_MODEL_DETAIL: Detail = Detail {
    id: "1-1",
    title: "Vanishing point detection models",
    tech_stack: &["Python", "pytorch"],
    body: "\
## Video reconstruction using vp detection results
### Sources
- [VanishingPoint_HoughTransform_GaussianSphere (CVPR'22)](https://github.com/yanconglin/VanishingPoint_HoughTransform_GaussianSphere)
- [NeurVPS](https://github.com/zhou13/neurvps)

### Metrics
- Angular accuracy
    ![AA cvpr](https://raw.githubusercontent.com/Oldentomato/video_reconstruction_using_vp_detection_results/main/README_imgs/AA_graph_cvpr.png)
    ![AA neur](https://raw.githubusercontent.com/Oldentomato/video_reconstruction_using_vp_detection_results/main/README_imgs/AA_graph_neur.png)

### Snapshot
![NYU result](https://raw.githubusercontent.com/Oldentomato/detect_vp-reconstruction_vid/main/README_imgs/snapshot.gif)

### Papers
[CVPR 2022 (arXiv 2203.08586)](https://arxiv.org/abs/2203.08586)
[NeurVPS (arXiv 1910.06316)](https://arxiv.org/abs/1910.06316)
",
};

static VP_MODEL: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&VP_MODEL_DETAIL),
    FileItem::file("3", "2023-07-18.startDate"),
    FileItem::file("4", "2023-08-28.endDate"),
    FileItem::link(
        "5",
        "Open on GitHub",
        "https://github.com/Oldentomato/video_reconstruction_using_vp_detection_results",
    ),
    FileItem::link(
        "6",
        "Reproducing the environment",
        "https://odblog.vercel.app/posts/%EC%86%8C%EC%8B%A4%EC%A0%90-%EA%B2%80%EC%B6%9C-%EC%8B%A4%ED%97%98%ED%99%98%EA%B2%BD-%EC%9E%AC%ED%98%84%ED%95%98%EA%B8%B0",
    ),
];

// ── legacy ────────────────────────────────────────────────────────────────

static INSTAGRAM_DETAIL: Detail = Detail {
    id: "1-1",
    title: "GPS-Instagram",
    tech_stack: &["React", "ExpressJS", "MongoDB"],
    body: "Upload a photo and the site pins where it was taken on a map.\n",
};

static INSTAGRAM: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&INSTAGRAM_DETAIL),
    FileItem::file("3", "2021-07-29.startDate"),
    FileItem::file("4", "2021-11-15.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/WebBoard_NodeJs"),
];

static MSG_GUARD_DETAIL: Detail = Detail {
    id: "1-1",
    title: "MSG Guard",
    tech_stack: &["React", "ExpressJS", "MongoDB"],
    body: "An NLP service pipeline that flags mobile spam messages.\n",
};

static MSG_GUARD: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&MSG_GUARD_DETAIL),
    FileItem::file("3", "2021-07-29.startDate"),
    FileItem::file("4", "2021-11-15.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/msg-guard-pipeline"),
];

static CODE_ENCRYPTION_DETAIL: Detail = Detail {
    id: "1-1",
    title: "Code Encryption",
    tech_stack: &["Python", "MongoDB", "Tkinter"],
    body: "A desktop tool for encrypting source code.\n",
};

static CODE_ENCRYPTION: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&CODE_ENCRYPTION_DETAIL),
    FileItem::file("3", "2022-12-12.startDate"),
    FileItem::file("4", "2023-01-04.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/Code_Encryption"),
];

static LEGACY_PORTFOLIO_DETAIL: Detail = Detail {
    id: "1-1",
    title: "Legacy Portfolio",
    tech_stack: &["React", "ExpressJS", "MongoDB", "threeJS"],
    body: "A MERN stack portfolio site.\n",
};

static LEGACY_PORTFOLIO: &[FileItem] = &[
    FileItem::folder("1", "Description", &[]).with_detail(&LEGACY_PORTFOLIO_DETAIL),
    FileItem::file("3", "2021-10-11.startDate"),
    FileItem::file("4", "2023-01-05.endDate"),
    FileItem::link("5", "Open on GitHub", "https://github.com/Oldentomato/PortFolio"),
];
