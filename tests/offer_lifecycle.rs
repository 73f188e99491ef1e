//! Integration tests for the offer request / submission lifecycle.
//!
//! Drives the handlers end to end through in-memory adapters:
//! 1. A buyer publishes a request and invitations go out
//! 2. Companies submit offers with attachments
//! 3. The dashboard reports progress per request
//! 4. Closing the request stops further submissions

use chrono::{Duration, Utc};
use std::sync::Arc;

use offer_desk::adapters::{
    InMemoryBlobStorage, InMemoryPersistence, MockDescriptionGenerator, RecordingNotifier,
};
use offer_desk::application::{
    CreateOfferRequestCommand, GenerateDescriptionCommand, GetDashboardQuery,
    GetOfferRequestQuery, GetSubmissionQuery, ListSubmissionsForRequestQuery,
    ResolveAttachmentQuery, SubmitOfferCommand, UpdateOfferRequestStatusCommand,
    UpdateSubmissionStatusCommand,
};
use offer_desk::domain::foundation::{ErrorCode, ValidationError};
use offer_desk::domain::offer_request::{
    CompanyInput, InvitationLinkBuilder, NewOfferRequest, OfferRequestStatus,
};
use offer_desk::domain::offer_submission::{
    NewOfferSubmission, OfferSubmissionError, OfferSubmissionStatus, UploadedFile,
};
use offer_desk::ports::Collection;
use offer_desk::OfferDeskServices;

// =============================================================================
// Test Infrastructure
// =============================================================================

const ORIGIN: &str = "https://offers.example.com";

struct Desk {
    services: OfferDeskServices,
    store: Arc<InMemoryPersistence>,
    blobs: Arc<InMemoryBlobStorage>,
    notifier: Arc<RecordingNotifier>,
}

impl Desk {
    fn new() -> Self {
        let store = Arc::new(InMemoryPersistence::new());
        let blobs = Arc::new(InMemoryBlobStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let services = OfferDeskServices::new(
            store.clone(),
            blobs.clone(),
            notifier.clone(),
            Arc::new(MockDescriptionGenerator::with_text(
                "We are looking for an agency to rebuild our website.",
            )),
            InvitationLinkBuilder::new(ORIGIN),
        );
        Self {
            services,
            store,
            blobs,
            notifier,
        }
    }
}

fn tomorrow() -> String {
    (Utc::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

fn website_redesign(companies: &[(&str, &str)]) -> NewOfferRequest {
    NewOfferRequest {
        title: "Website Redesign".to_string(),
        description: "Rebuild the marketing site".to_string(),
        keywords: "web, design, accessibility".to_string(),
        requirements: "WCAG 2.1 AA".to_string(),
        due_date: tomorrow(),
        companies: companies
            .iter()
            .map(|(name, email)| CompanyInput::new(*name, *email))
            .collect(),
    }
}

fn offer_from(company: &str, email: &str) -> NewOfferSubmission {
    NewOfferSubmission {
        company_name: company.to_string(),
        contact_person: "Jordan Lee".to_string(),
        contact_email: email.to_string(),
        offer_details: "Eight week engagement".to_string(),
        pricing: "EUR 24,000".to_string(),
    }
}

fn pdfs(n: usize) -> Vec<UploadedFile> {
    (0..n)
        .map(|i| {
            UploadedFile::new(
                format!("proposal-{i}.pdf"),
                "application/pdf",
                format!("page {i}").into_bytes(),
            )
        })
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn website_redesign_scenario() {
    let desk = Desk::new();

    // Publish
    let created = desk
        .services
        .create_offer_request_handler()
        .handle(CreateOfferRequestCommand {
            request: website_redesign(&[("Acme", "a@acme.com")]),
        })
        .await
        .unwrap();
    let request_id = created.request.id().clone();
    assert_eq!(created.request.status(), OfferRequestStatus::SubmissionsOpen);

    let sent = desk.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].submission_link,
        format!("{ORIGIN}/#/submit-offer/{request_id}")
    );

    // Submit
    let submission = desk
        .services
        .submit_offer_handler()
        .handle(SubmitOfferCommand {
            offer_request_id: request_id.clone(),
            offer: offer_from("Acme", "a@acme.com"),
            files: pdfs(1),
        })
        .await
        .unwrap();
    assert_eq!(submission.status(), OfferSubmissionStatus::Submitted);
    assert_eq!(submission.attachments().len(), 1);

    let overview = desk
        .services
        .dashboard_handler()
        .handle(GetDashboardQuery)
        .await
        .unwrap();
    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].counts.received_count, 1);
    assert_eq!(overview[0].counts.invited_count, 1);

    // Close
    desk.services
        .update_offer_request_status_handler()
        .handle(UpdateOfferRequestStatusCommand {
            request_id: request_id.clone(),
            status: OfferRequestStatus::Closed,
        })
        .await
        .unwrap();

    let rejected = desk
        .services
        .submit_offer_handler()
        .handle(SubmitOfferCommand {
            offer_request_id: request_id.clone(),
            offer: offer_from("Acme", "a@acme.com"),
            files: pdfs(1),
        })
        .await;
    assert!(matches!(rejected, Err(OfferSubmissionError::RequestClosed(_))));
    assert_eq!(desk.store.count(Collection::Submissions).await, 1);
    assert_eq!(desk.blobs.len().await, 1);
}

#[tokio::test]
async fn attachment_limit_is_five() {
    let desk = Desk::new();
    let request = desk
        .services
        .create_offer_request_handler()
        .handle(CreateOfferRequestCommand {
            request: website_redesign(&[("Acme", "a@acme.com")]),
        })
        .await
        .unwrap()
        .request;

    let too_many = desk
        .services
        .submit_offer_handler()
        .handle(SubmitOfferCommand {
            offer_request_id: request.id().clone(),
            offer: offer_from("Acme", "a@acme.com"),
            files: pdfs(6),
        })
        .await;
    assert!(matches!(
        too_many,
        Err(OfferSubmissionError::Validation(ValidationError::TooMany { max: 5, actual: 6, .. }))
    ));
    assert!(desk.blobs.is_empty().await);

    let accepted = desk
        .services
        .submit_offer_handler()
        .handle(SubmitOfferCommand {
            offer_request_id: request.id().clone(),
            offer: offer_from("Acme", "a@acme.com"),
            files: pdfs(5),
        })
        .await
        .unwrap();

    let mut ids: Vec<_> = accepted
        .attachments()
        .iter()
        .map(|a| a.id().as_str().to_string())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
    let names: Vec<_> = accepted.attachments().iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        ["proposal-0.pdf", "proposal-1.pdf", "proposal-2.pdf", "proposal-3.pdf", "proposal-4.pdf"]
    );
}

#[tokio::test]
async fn dashboard_counts_invited_and_received() {
    let desk = Desk::new();
    let request = desk
        .services
        .create_offer_request_handler()
        .handle(CreateOfferRequestCommand {
            request: website_redesign(&[
                ("Acme", "a@acme.com"),
                ("Beta", "hello@beta.io"),
                ("Gamma", "offers@gamma.dev"),
            ]),
        })
        .await
        .unwrap()
        .request;
    assert_eq!(desk.notifier.sent().len(), 3);

    for (company, email) in [("Acme", "a@acme.com"), ("Beta", "hello@beta.io")] {
        desk.services
            .submit_offer_handler()
            .handle(SubmitOfferCommand {
                offer_request_id: request.id().clone(),
                offer: offer_from(company, email),
                files: Vec::new(),
            })
            .await
            .unwrap();
    }

    let overview = desk
        .services
        .dashboard_handler()
        .handle(GetDashboardQuery)
        .await
        .unwrap();
    assert_eq!(overview[0].counts.invited_count, 3);
    assert_eq!(overview[0].counts.received_count, 2);
    assert_eq!(overview[0].counts.progress_label(), "2 / 3 submissions");

    let listed = desk
        .services
        .list_submissions_for_request_handler()
        .handle(ListSubmissionsForRequestQuery {
            offer_request_id: request.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].submitted_at() >= listed[1].submitted_at());
}

#[tokio::test]
async fn reviewer_flow_marks_and_downloads_attachments() {
    let desk = Desk::new();
    let request = desk
        .services
        .create_offer_request_handler()
        .handle(CreateOfferRequestCommand {
            request: website_redesign(&[("Acme", "a@acme.com")]),
        })
        .await
        .unwrap()
        .request;

    let submission = desk
        .services
        .submit_offer_handler()
        .handle(SubmitOfferCommand {
            offer_request_id: request.id().clone(),
            offer: offer_from("Acme", "a@acme.com"),
            files: pdfs(2),
        })
        .await
        .unwrap();

    // Evaluating requests still take offers; status moves are reviewer-driven.
    let moved = desk
        .services
        .update_offer_request_status_handler()
        .handle(UpdateOfferRequestStatusCommand {
            request_id: request.id().clone(),
            status: OfferRequestStatus::Evaluating,
        })
        .await
        .unwrap();
    assert_eq!(moved.previous_status, OfferRequestStatus::SubmissionsOpen);

    for status in [OfferSubmissionStatus::Viewed, OfferSubmissionStatus::Shortlisted] {
        desk.services
            .update_submission_status_handler()
            .handle(UpdateSubmissionStatusCommand {
                submission_id: submission.id().clone(),
                status,
            })
            .await
            .unwrap();
    }

    let stored = desk
        .services
        .get_submission_handler()
        .handle(GetSubmissionQuery {
            submission_id: submission.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(stored.status(), OfferSubmissionStatus::Shortlisted);

    let second = &stored.attachments()[1];
    let resolved = desk
        .services
        .resolve_attachment_handler()
        .handle(ResolveAttachmentQuery {
            submission_id: stored.id().clone(),
            attachment_id: second.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(resolved.content, b"page 1".to_vec());
    assert_eq!(resolved.attachment.name(), "proposal-1.pdf");

    let reset = desk
        .services
        .update_submission_status_handler()
        .handle(UpdateSubmissionStatusCommand {
            submission_id: submission.id().clone(),
            status: OfferSubmissionStatus::Submitted,
        })
        .await;
    assert!(matches!(reset, Err(OfferSubmissionError::InvalidTransition(_))));
}

#[tokio::test]
async fn closed_request_cannot_reopen() {
    let desk = Desk::new();
    let request = desk
        .services
        .create_offer_request_handler()
        .handle(CreateOfferRequestCommand {
            request: website_redesign(&[("Acme", "a@acme.com")]),
        })
        .await
        .unwrap()
        .request;

    let handler = desk.services.update_offer_request_status_handler();
    handler
        .handle(UpdateOfferRequestStatusCommand {
            request_id: request.id().clone(),
            status: OfferRequestStatus::Closed,
        })
        .await
        .unwrap();

    let reopened = handler
        .handle(UpdateOfferRequestStatusCommand {
            request_id: request.id().clone(),
            status: OfferRequestStatus::SubmissionsOpen,
        })
        .await;
    assert_eq!(reopened.unwrap_err().code(), ErrorCode::InvalidStateTransition);

    let stored = desk
        .services
        .get_offer_request_handler()
        .handle(GetOfferRequestQuery {
            request_id: request.id().clone(),
        })
        .await
        .unwrap();
    assert_eq!(stored.status(), OfferRequestStatus::Closed);
}

#[tokio::test]
async fn description_is_drafted_from_keywords() {
    let desk = Desk::new();

    let drafted = desk
        .services
        .generate_description_handler()
        .handle(GenerateDescriptionCommand {
            keywords: "web, design".to_string(),
        })
        .await
        .unwrap();
    assert!(drafted.generated);
    assert!(drafted.description.contains("rebuild our website"));

    let blank = desk
        .services
        .generate_description_handler()
        .handle(GenerateDescriptionCommand {
            keywords: "   ".to_string(),
        })
        .await;
    assert_eq!(blank.unwrap_err().code(), ErrorCode::ValidationFailed);
}
