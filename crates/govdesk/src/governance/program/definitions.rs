//! Static program catalog: the ten workshops and their item roster.
//!
//! Provisioning happens once per tenant; every workshop exists up front in
//! `not_started` with an empty criteria state, and every catalog item is
//! materialized in `not_started` with an empty acceptance state. Labels are
//! stored as-is; localization is a presentation concern.

use std::collections::BTreeMap;

use super::domain::{ItemRequirement, ItemStatus, Workshop, WorkshopItem, WorkshopStatus};

/// The program always counts ten workshops, even before any are touched.
pub const PROGRAM_WORKSHOPS: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct WorkshopDefinition {
    pub workshop_number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub completion_criteria: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ItemDefinition {
    pub item_id: &'static str,
    pub workshop_number: u8,
    pub title: &'static str,
    pub module_name: &'static str,
    pub requirement: ItemRequirement,
    pub acceptance_criteria: &'static [&'static str],
}

pub const WORKSHOP_CATALOG: &[WorkshopDefinition] = &[
    WorkshopDefinition {
        workshop_number: 1,
        title: "Cadrage & Baseline",
        description: "Définir le périmètre, identifier les parties prenantes et capturer la baseline initiale",
        completion_criteria: &[
            "Sponsor + Platform Owner identifiés",
            "Périmètre défini (in/out)",
            "RACI v0 complété (au moins 6 processus)",
            "Baseline v0 saisie (même approximative)",
            "Backlog Atelier 2 créé (au moins 5 actions)",
        ],
    },
    WorkshopDefinition {
        workshop_number: 2,
        title: "Environnements & DLP",
        description: "Stratégie d'environnements, DLP et catalogue de connecteurs",
        completion_criteria: &[
            "Environment Strategy v0 validée (types + naming + création)",
            "DLP Strategy v0 validée (par posture d'env)",
            "Catalogue connecteurs v0 (au moins top 10 + sensibles)",
            "Process d'exception défini (durée, approbation, preuves)",
            "Licensing Snapshot capturé (contraintes + questions ouvertes)",
            "Backlog Atelier 3 créé (accès + exports + mise en œuvre DLP)",
        ],
    },
    WorkshopDefinition {
        workshop_number: 3,
        title: "Onboarding & Collecte",
        description: "Setup du portail, méthode de collecte et baseline v1",
        completion_criteria: &[
            "Tenant portail client créé + RBAC en place",
            "Méthode de collecte décidée (API/Export/Hybride)",
            "Au moins une collecte baseline v1 exécutée (coverage affiché)",
            "Dashboard 'risques évidents' opérationnel",
            "Top 10 risques + Top 10 actions saisis et assignés",
            "Cadence de revue gouvernance définie",
        ],
    },
    WorkshopDefinition {
        workshop_number: 4,
        title: "ALM & Solutions",
        description: "Stratégie ALM, standards solutions et checklist release",
        completion_criteria: &[
            "ALM Strategy v0 validée",
            "Standards Solutions validés",
            "Registre 'prod hors solution' créé (au moins top 10 items)",
            "Release checklist v0 créée",
            "Connection strategy définie (au moins règles de base)",
            "Backlog migration ALM créé et assigné",
        ],
    },
    WorkshopDefinition {
        workshop_number: 5,
        title: "CI/CD Foundation",
        description: "Blueprint CI/CD, setup de l'outillage DevOps et pipelines v0",
        completion_criteria: &[
            "CICD Strategy v0 validée",
            "Projet/repo DevOps défini (et idéalement créé)",
            "Service identity définie + plan permissions",
            "Pipelines v0 définis (build + test)",
            "Approvals prod définis (même si pas encore implémentés)",
            "Backlog atelier 6 créé",
        ],
    },
    WorkshopDefinition {
        workshop_number: 6,
        title: "Quality Gates & Release",
        description: "Quality gates, smoke tests et release logging",
        completion_criteria: &[
            "Gates v1 définis et validés (au moins 5 bloquants)",
            "Smoke Test Pack v1 défini (3–5 tests)",
            "Release report standard défini",
            "Au moins 1 déploiement vers Test journalisé (release log)",
            "Registres 'deployments' + 'findings' opérationnels",
            "Backlog atelier 7 alimenté par findings réels",
        ],
    },
    WorkshopDefinition {
        workshop_number: 7,
        title: "Sécurité & RBAC",
        description: "RBAC plateforme, DLP avancé et classification",
        completion_criteria: &[
            "RBAC plateforme v0 défini (rôles + groupes + scope)",
            "DLP v1 défini (par env + exceptions + revue)",
            "Prod Policy v0 validée (règles non négociables)",
            "Modèle de classification défini",
            "Backlog sécurité créé et priorisé (top 10 actions)",
            "Preuves / décisions enregistrées",
        ],
    },
    WorkshopDefinition {
        workshop_number: 8,
        title: "Canvas Apps Quality",
        description: "Standards UX/UI, checklist qualité et scoring apps",
        completion_criteria: &[
            "Canvas Standard v0 validé (UX/UI + patterns)",
            "Checklist qualité prod v0 validée",
            "Au moins 1–3 apps auditées (quality index saisi)",
            "Backlog d'amélioration créé (top 10 actions)",
            "Stratégie composants décidée (même 'non' assumé)",
            "Règles erreurs/logging décidées",
        ],
    },
    WorkshopDefinition {
        workshop_number: 9,
        title: "Flows Governance",
        description: "Politique flows, intégrations et monitoring",
        completion_criteria: &[
            "Flow Governance Policy validée",
            "Integration Policy v0 validée (connecteurs + HTTP/custom)",
            "Identity strategy pour flows définie (service accounts)",
            "Monitoring minimal défini (qui reçoit quoi)",
            "Top 10 flows critiques renseignés dans le portail",
            "Flow Risk Index v0 validé",
            "Backlog priorisé (top 10 actions)",
        ],
    },
    WorkshopDefinition {
        workshop_number: 10,
        title: "Run & Transition",
        description: "Playbook, roadmap et transition vers le Run",
        completion_criteria: &[
            "Playbook v1 approuvé + lien stocké",
            "Roadmap 30/60/90 validée et saisie",
            "Operating model (cadence + comité + owners) validé",
            "Adoption plan v0 validé",
            "KPI pack validé (définitions + fréquence)",
            "Programme marqué 'Completed' + transition Run",
        ],
    },
];

pub const ITEM_CATALOG: &[ItemDefinition] = &[
    // Workshop 1
    ItemDefinition {
        item_id: "A1-01",
        workshop_number: 1,
        title: "Profil client",
        module_name: "Tenant / Organisation",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Fiche organisation créée",
            "Secteur + taille + criticité renseignés",
            "Contraintes (réglementaires/IT/sécurité) renseignées",
            "Enjeux business résumés",
            "Statut de validation (draft/validé) + date",
        ],
    },
    ItemDefinition {
        item_id: "A1-02",
        workshop_number: 1,
        title: "Périmètre de gouvernance",
        module_name: "Scope",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Périmètre In défini (types d'actifs/env)",
            "Périmètre Out défini",
            "Justification du scope saisie",
            "Hypothèses/limites documentées",
            "Statut validé + sponsor/owner associé",
        ],
    },
    ItemDefinition {
        item_id: "A1-03",
        workshop_number: 1,
        title: "Parties prenantes & gouvernance",
        module_name: "Stakeholders",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Sponsor identifié",
            "Platform Owner identifié",
            "Contacts clés listés (sécurité, ops, dev, conformité)",
            "Rôle + responsabilité pour chaque stakeholder",
            "Backup/adjoint identifié pour rôles critiques",
        ],
    },
    ItemDefinition {
        item_id: "A1-04",
        workshop_number: 1,
        title: "RACI v0",
        module_name: "Operating Model",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Au moins 6 processus couverts",
            "R, A, C, I attribués par processus",
            "Aucun processus sans 'A'",
            "Coverage RACI calculable",
            "Version taggée v0 + date",
        ],
    },
    ItemDefinition {
        item_id: "A1-05",
        workshop_number: 1,
        title: "Baseline",
        module_name: "Baseline Snapshot",
        requirement: ItemRequirement::Recommande,
        acceptance_criteria: &[
            "Snapshot créé avec date",
            "Valeurs initiales saisies (même approx)",
            "Source indiquée (approx/export/API)",
            "Champs manquants explicités",
            "Prochaine étape d'amélioration notée",
        ],
    },
    ItemDefinition {
        item_id: "A1-06",
        workshop_number: 1,
        title: "Documents existants & contraintes",
        module_name: "Evidence / Artefacts",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Référentiel preuves créé",
            "Au moins 3 artefacts liés",
            "Chaque artefact a un owner",
            "Chaque artefact a un type + date",
            "Liens accessibles ou pièce jointe",
        ],
    },
    ItemDefinition {
        item_id: "A1-07",
        workshop_number: 1,
        title: "Backlog d'actions",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Au moins 5 actions créées",
            "Chaque action a owner + priorité + due date",
            "Actions liées à un atelier/module",
            "Statut initial défini (open)",
            "Risques/impacts décrits pour actions majeures",
        ],
    },
    // Workshop 2
    ItemDefinition {
        item_id: "A2-01",
        workshop_number: 2,
        title: "Stratégie d'environnements",
        module_name: "Environment Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Types d'environnements définis",
            "Règles de naming définies",
            "Règles de création documentées",
            "Règles de cycle de vie",
            "Statut v0 validé",
        ],
    },
    ItemDefinition {
        item_id: "A2-02",
        workshop_number: 2,
        title: "Règles de création & approbation",
        module_name: "Request & Approval",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Process de demande décrit",
            "Critères d'approbation définis",
            "Rôles d'approbation nommés",
            "Délais/SLAs indicatifs définis",
            "Preuves conservées",
        ],
    },
    ItemDefinition {
        item_id: "A2-03",
        workshop_number: 2,
        title: "Stratégie DLP",
        module_name: "DLP Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Posture DLP par type d'environnement définie",
            "Groupes de connecteurs définis",
            "Règles minimales prod listées",
            "Mode de revue/maintenance défini",
            "Statut v0 validé",
        ],
    },
    ItemDefinition {
        item_id: "A2-04",
        workshop_number: 2,
        title: "Catalogue de connecteurs",
        module_name: "Connector Catalog",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 connecteurs majeurs listés",
            "Au moins 5 connecteurs sensibles identifiés",
            "Chaque connecteur a une classe de risque",
            "Statut 'connu/inconnu' géré",
            "Date de dernière revue enregistrée",
        ],
    },
    ItemDefinition {
        item_id: "A2-05",
        workshop_number: 2,
        title: "Exceptions DLP",
        module_name: "Exceptions Register",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Règles d'exception définies",
            "Durée/expiration obligatoire",
            "Approbation obligatoire",
            "Preuves exigées",
            "Process de revue/renouvellement défini",
        ],
    },
    ItemDefinition {
        item_id: "A2-06",
        workshop_number: 2,
        title: "Licences & contraintes",
        module_name: "Licensing Snapshot",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Snapshot licences créé",
            "Hypothèses documentées",
            "Contraintes budgétaires listées",
            "Questions ouvertes capturées",
            "Décisions/licensing risks consignés",
        ],
    },
    ItemDefinition {
        item_id: "A2-07",
        workshop_number: 2,
        title: "Plan d'action Atelier 2",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Actions liées aux sujets env/DLP/connecteurs",
            "Owners assignés",
            "Priorités définies",
            "Dépendances notées",
            "Backlog atelier 3 préparé",
        ],
    },
    // Workshop 3
    ItemDefinition {
        item_id: "A3-01",
        workshop_number: 3,
        title: "Onboarding du portail",
        module_name: "Tenant Setup",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Tenant créé",
            "Paramètres de base renseignés",
            "RBAC initial appliqué",
            "Accès admin vérifié",
            "Statut 'ready' renseigné",
        ],
    },
    ItemDefinition {
        item_id: "A3-02",
        workshop_number: 3,
        title: "Accès & autorisations",
        module_name: "Access Readiness",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Liste des accès requis documentée",
            "Accès accordés ou planifiés",
            "Risques/bloquants listés",
            "Propriétaire identifié",
            "Date de vérification enregistrée",
        ],
    },
    ItemDefinition {
        item_id: "A3-03",
        workshop_number: 3,
        title: "Méthode de collecte",
        module_name: "Data Collection Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Mode choisi (API/export/hybride)",
            "Fréquence cible définie",
            "Responsables identifiés",
            "Stockage des données défini",
            "Limites documentées",
        ],
    },
    ItemDefinition {
        item_id: "A3-04",
        workshop_number: 3,
        title: "Baseline v1",
        module_name: "Baseline Snapshot v1",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Baseline v1 exécutée",
            "Coverage % calculé et visible",
            "Date/heure enregistrées",
            "Top 10 risques identifiés",
            "Écarts vs v0 notés",
        ],
    },
    ItemDefinition {
        item_id: "A3-05",
        workshop_number: 3,
        title: "Catalogue connecteurs (v1)",
        module_name: "Connector Catalog",
        requirement: ItemRequirement::Recommande,
        acceptance_criteria: &[
            "Nouveaux connecteurs ajoutés",
            "Connecteurs 'inconnus' réduits",
            "Classification mise à jour",
            "Connecteurs sensibles confirmés",
            "Date de revue + responsable",
        ],
    },
    ItemDefinition {
        item_id: "A3-06",
        workshop_number: 3,
        title: "Scoring / Maturity rules v0",
        module_name: "Scoring Configuration",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Dimensions de scoring définies",
            "Seuils/pondérations définis",
            "Règles testées sur baseline v1",
            "Résultats compréhensibles",
            "Version v0 enregistrée + date",
        ],
    },
    ItemDefinition {
        item_id: "A3-07",
        workshop_number: 3,
        title: "Plan d'action du portail",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 actions créées",
            "Actions assignées",
            "Dates cibles définies",
            "Statuts cohérents",
            "Indicateur ageing possible",
        ],
    },
    ItemDefinition {
        item_id: "A3-08",
        workshop_number: 3,
        title: "Rituel de gouvernance",
        module_name: "Governance Cadence",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Fréquence définie",
            "Participants/roles définis",
            "Agenda type défini",
            "Mode de décision/validation défini",
            "Format de compte-rendu défini",
        ],
    },
    // Workshop 4
    ItemDefinition {
        item_id: "A4-01",
        workshop_number: 4,
        title: "Modèle ALM cible",
        module_name: "ALM Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Environnements ALM alignés",
            "Flux de promotion décrit",
            "Règles de versioning définies",
            "Rôles et responsabilités ALM définis",
            "Statut v0 validé",
        ],
    },
    ItemDefinition {
        item_id: "A4-02",
        workshop_number: 4,
        title: "Standards Solutions",
        module_name: "Solution Standards",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Naming standards définis",
            "Publisher/managed/unmanaged clarifiés",
            "Règles de structure définies",
            "Exceptions documentées",
            "Exemples concrets fournis",
        ],
    },
    ItemDefinition {
        item_id: "A4-03",
        workshop_number: 4,
        title: "Registre 'Prod hors solution'",
        module_name: "ALM Gaps Register",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Registre créé",
            "Au moins 10 items listés",
            "Chaque item a owner + criticité",
            "Plan de remédiation pour items top",
            "Tendance/compteur possible",
        ],
    },
    ItemDefinition {
        item_id: "A4-04",
        workshop_number: 4,
        title: "Stratégie connexions & comptes",
        module_name: "Connection Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Règles comptes de service définies",
            "Interdits prod listés",
            "Mode de rotation/gestion secrets défini",
            "Exceptions encadrées",
            "Statut validé",
        ],
    },
    ItemDefinition {
        item_id: "A4-05",
        workshop_number: 4,
        title: "Checklist de release v0",
        module_name: "Release Checklist v0",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Checklist créée",
            "Contrôles minimaux inclus",
            "Approvals définis",
            "Preuves attendues listées",
            "Version v0 publiée",
        ],
    },
    ItemDefinition {
        item_id: "A4-06",
        workshop_number: 4,
        title: "Plan d'action Atelier 4",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Actions ALM créées",
            "Owners assignés",
            "Priorités définies",
            "Dépendances listées",
            "Backlog migration ALM alimenté",
        ],
    },
    // Workshop 5
    ItemDefinition {
        item_id: "A5-01",
        workshop_number: 5,
        title: "CI/CD Blueprint",
        module_name: "CICD Strategy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Blueprint documenté",
            "Étapes pipeline décrites",
            "Environnements cibles listés",
            "Contrôles (gates) prévus",
            "Statut v0 validé",
        ],
    },
    ItemDefinition {
        item_id: "A5-02",
        workshop_number: 5,
        title: "Setup DevOps",
        module_name: "Tooling Readiness",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Projet/repo définis",
            "Modèle branches défini",
            "Permissions de base planifiées",
            "Accès équipes confirmés",
            "Blocages outillage listés",
        ],
    },
    ItemDefinition {
        item_id: "A5-03",
        workshop_number: 5,
        title: "Identité technique & sécurité",
        module_name: "Service Identity",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Identité technique définie",
            "Permissions minimales documentées",
            "Séparation des rôles définie",
            "Mode de gestion secrets défini",
            "Blocages sécurité listés",
        ],
    },
    ItemDefinition {
        item_id: "A5-04",
        workshop_number: 5,
        title: "Pipeline v0 définition",
        module_name: "Pipeline Definitions",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Pipeline build défini",
            "Pipeline test défini",
            "Déclencheurs décrits",
            "Variables/secrets gérés",
            "Sorties attendues définies",
        ],
    },
    ItemDefinition {
        item_id: "A5-05",
        workshop_number: 5,
        title: "Mapping checklist",
        module_name: "Quality Gates v0",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Checklist reliée à gates",
            "Gates listés (v0)",
            "Critères bloquants identifiés",
            "Exceptions possibles cadrées",
            "Traçabilité du résultat prévue",
        ],
    },
    ItemDefinition {
        item_id: "A5-06",
        workshop_number: 5,
        title: "Backlog Atelier 6",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Actions pour implémenter gates/tests créées",
            "Owners/dates définis",
            "Dépendances tracées",
            "Priorités ajustées",
            "Préparation d'un premier déploiement test",
        ],
    },
    // Workshop 6
    ItemDefinition {
        item_id: "A6-01",
        workshop_number: 6,
        title: "Quality Gates v1",
        module_name: "CICD Quality Gates",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Au moins 5 gates bloquants définis",
            "Critères mesurables (pass/fail)",
            "Point d'intégration pipeline prévu",
            "Mode de preuve/rapport défini",
            "Statut v1 validé",
        ],
    },
    ItemDefinition {
        item_id: "A6-02",
        workshop_number: 6,
        title: "Smoke Test Pack v1",
        module_name: "Test Catalog",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "3 à 5 smoke tests définis",
            "Préconditions documentées",
            "Résultat attendu par test",
            "Mode d'exécution défini",
            "Statut v1 validé",
        ],
    },
    ItemDefinition {
        item_id: "A6-03",
        workshop_number: 6,
        title: "Release Report Standard",
        module_name: "Release Reporting",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Template de rapport défini",
            "Champs obligatoires",
            "Résultats gates/tests inclus",
            "Section risques/écarts incluse",
            "Lien de stockage défini",
        ],
    },
    ItemDefinition {
        item_id: "A6-04",
        workshop_number: 6,
        title: "Release Log",
        module_name: "Deployment Register",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Registre actif",
            "Au moins 1 déploiement Test journalisé",
            "Chaque entrée a date + env + initiateur",
            "Lien vers rapport de release",
            "Statut succès/échec consigné",
        ],
    },
    ItemDefinition {
        item_id: "A6-05",
        workshop_number: 6,
        title: "Non-conformités & actions automatiques",
        module_name: "Compliance Findings",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Findings créables",
            "Chaque finding a sévérité + owner + due date",
            "Lien au déploiement/artefact",
            "Règle de clôture définie",
            "Backlog alimenté depuis findings",
        ],
    },
    // Workshop 7
    ItemDefinition {
        item_id: "A7-01",
        workshop_number: 7,
        title: "RBAC plateforme",
        module_name: "Platform Security",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Rôles admin identifiés",
            "Groupes AD/Entra liés",
            "Scope défini",
            "Principes 'least privilege' documentés",
            "Revue périodique planifiée",
        ],
    },
    ItemDefinition {
        item_id: "A7-02",
        workshop_number: 7,
        title: "Dataverse RBAC",
        module_name: "Dataverse Security Model",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Modèle rôles défini",
            "BU/teams alignées",
            "Accès aux tables sensibles cadré",
            "Scénarios d'accès testés",
            "Statut validé",
        ],
    },
    ItemDefinition {
        item_id: "A7-03",
        workshop_number: 7,
        title: "DLP Advanced Strategy v1",
        module_name: "DLP Strategy v1",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Règles DLP par environnement",
            "Connecteurs sensibles traités",
            "Process d'évolution défini",
            "Mesure de conformité possible",
            "Statut v1 validé",
        ],
    },
    ItemDefinition {
        item_id: "A7-04",
        workshop_number: 7,
        title: "Exceptions Register",
        module_name: "Exceptions",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Registre opérationnel",
            "Champs obligatoires",
            "Approbateur défini",
            "Revue périodique définie",
            "Indicateur 'exceptions actives + âge' possible",
        ],
    },
    ItemDefinition {
        item_id: "A7-05",
        workshop_number: 7,
        title: "Application & Flow Governance",
        module_name: "App/Flow Governance Rules",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Règles prod définies",
            "Règles de support définies",
            "Règles de naming/standards définies",
            "Exceptions cadrées",
            "Publication/communication planifiée",
        ],
    },
    ItemDefinition {
        item_id: "A7-06",
        workshop_number: 7,
        title: "Classification Model",
        module_name: "Classification Schema",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Niveaux de classification définis",
            "Critères par niveau",
            "Mapping vers règles",
            "Exemples donnés",
            "Statut validé",
        ],
    },
    ItemDefinition {
        item_id: "A7-07",
        workshop_number: 7,
        title: "Security Backlog",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 actions sécurité identifiées",
            "Priorité + owner + dates",
            "Actions liées aux risques",
            "Suivi ageing possible",
            "Statut revue défini",
        ],
    },
    // Workshop 8
    ItemDefinition {
        item_id: "A8-01",
        workshop_number: 8,
        title: "Canvas Standard v0",
        module_name: "UX/UI Standards",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Standards publiés",
            "Règles navigation/écrans définies",
            "Règles accessibilité minimales",
            "Patterns recommandés listés",
            "Statut v0 validé",
        ],
    },
    ItemDefinition {
        item_id: "A8-02",
        workshop_number: 8,
        title: "Checklist Qualité Prod v0",
        module_name: "Quality Checklist",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Checklist créée",
            "Critères minimum",
            "Critères de blocage identifiés",
            "Format d'évidence défini",
            "Version v0 publiée",
        ],
    },
    ItemDefinition {
        item_id: "A8-03",
        workshop_number: 8,
        title: "Canvas App Catalog (critique)",
        module_name: "App Inventory Enrichment",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Apps critiques identifiées",
            "Pour chaque app: owner + usage + env",
            "Criticité renseignée",
            "Dépendances/connexions notées",
            "Statut 'auditée/non auditée'",
        ],
    },
    ItemDefinition {
        item_id: "A8-04",
        workshop_number: 8,
        title: "Canvas Quality Score v0",
        module_name: "Canvas App Quality Index",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Méthode de scoring définie",
            "Score saisi pour 1 à 3 apps",
            "Causes principales capturées",
            "Tendance possible",
            "Version v0 enregistrée",
        ],
    },
    ItemDefinition {
        item_id: "A8-05",
        workshop_number: 8,
        title: "Component Strategy",
        module_name: "Reusable Components",
        requirement: ItemRequirement::Optionnel,
        acceptance_criteria: &[
            "Décision prise (oui/non)",
            "Si oui: catalogue composants défini",
            "Règles contribution/validation",
            "Stratégie versioning",
            "Exemple d'usage documenté",
        ],
    },
    ItemDefinition {
        item_id: "A8-06",
        workshop_number: 8,
        title: "Observabilité (min)",
        module_name: "Telemetry & Monitoring",
        requirement: ItemRequirement::Recommande,
        acceptance_criteria: &[
            "Événements à monitorer définis",
            "Destinataires alertes définis",
            "Seuils/critères d'alerte définis",
            "Process incident défini",
            "Preuves/logs accessibles",
        ],
    },
    ItemDefinition {
        item_id: "A8-07",
        workshop_number: 8,
        title: "Backlog Atelier 8",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 actions amélioration créées",
            "Lien aux apps concernées",
            "Owners + dates",
            "Priorités définies",
            "Mesure d'avancement prévue",
        ],
    },
    // Workshop 9
    ItemDefinition {
        item_id: "A9-01",
        workshop_number: 9,
        title: "Flow Governance Rules",
        module_name: "Flow Governance Policy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Politique flows documentée",
            "Règles prod définies",
            "Règles de cycle de vie",
            "Exceptions cadrées",
            "Statut validé",
        ],
    },
    ItemDefinition {
        item_id: "A9-02",
        workshop_number: 9,
        title: "Integration Policy v0",
        module_name: "Integration & Connectors Policy",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Règles HTTP/custom listées",
            "Connecteurs sensibles encadrés",
            "Conditions d'approbation définies",
            "Exigences de preuve définies",
            "Version v0 validée",
        ],
    },
    ItemDefinition {
        item_id: "A9-03",
        workshop_number: 9,
        title: "Identity Strategy for Flows",
        module_name: "Flow Identity & Connections",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Modèle comptes de service défini",
            "Règles d'utilisation en prod",
            "Gestion secrets/rotation définie",
            "Exceptions cadrées",
            "Statut validé",
        ],
    },
    ItemDefinition {
        item_id: "A9-04",
        workshop_number: 9,
        title: "Flow Catalog (critique)",
        module_name: "Flow Inventory",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 flows critiques listés",
            "Owner + backup par flow",
            "Dépendances notées",
            "Env prod identifié",
            "Doc de support minimal lié",
        ],
    },
    ItemDefinition {
        item_id: "A9-05",
        workshop_number: 9,
        title: "Monitoring Model",
        module_name: "Operations & Monitoring",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Modèle d'alerting défini",
            "Canaux d'alerte définis",
            "Responsables par périmètre",
            "SLA/horaires support définis",
            "Test d'alerte réalisé",
        ],
    },
    ItemDefinition {
        item_id: "A9-06",
        workshop_number: 9,
        title: "Flow Risk Index v0",
        module_name: "Risk Scoring",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Critères de risque définis",
            "Scoring appliqué à flows critiques",
            "Seuils définis",
            "Résultats exploitables",
            "Version v0 enregistrée",
        ],
    },
    ItemDefinition {
        item_id: "A9-07",
        workshop_number: 9,
        title: "Backlog Atelier 9",
        module_name: "Action Plan",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Top 10 actions remédiation créées",
            "Actions liées aux flows",
            "Owners + dates",
            "Priorités définies",
            "Mesure d'avancement/aging possible",
        ],
    },
    // Workshop 10
    ItemDefinition {
        item_id: "A10-01",
        workshop_number: 10,
        title: "Governance Playbook v1",
        module_name: "Governance Documentation",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Playbook v1 approuvé",
            "Lien stocké dans le portail",
            "Sections minimales présentes",
            "Date/valideur enregistrés",
            "Process de mise à jour défini",
        ],
    },
    ItemDefinition {
        item_id: "A10-02",
        workshop_number: 10,
        title: "Operating Model (cadence & comité)",
        module_name: "Governance Cadence & Committee",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Comité(s) définis",
            "Cadence fixée",
            "Rôles/owners confirmés",
            "Règles de décision/escale définies",
            "Agenda type + compte-rendu standard",
        ],
    },
    ItemDefinition {
        item_id: "A10-03",
        workshop_number: 10,
        title: "Roadmap 30/60/90",
        module_name: "Roadmap",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Roadmap saisie (30/60/90)",
            "Actions priorisées",
            "Owners + dates",
            "Dépendances notées",
            "Critères de succès définis",
        ],
    },
    ItemDefinition {
        item_id: "A10-04",
        workshop_number: 10,
        title: "Adoption Plan v0",
        module_name: "Adoption & Change",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Publics cibles identifiés",
            "Messages clés définis",
            "Plan formations/communications",
            "Mesure adoption définie",
            "Version v0 validée",
        ],
    },
    ItemDefinition {
        item_id: "A10-05",
        workshop_number: 10,
        title: "KPI Pack",
        module_name: "Governance Metrics",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Liste KPIs définie",
            "Définition + formule par KPI",
            "Fréquence de calcul",
            "Source de données",
            "Responsable de suivi",
        ],
    },
    ItemDefinition {
        item_id: "A10-06",
        workshop_number: 10,
        title: "Programme Completion",
        module_name: "Workshops Completion",
        requirement: ItemRequirement::Obligatoire,
        acceptance_criteria: &[
            "Ateliers marqués 'Completed'",
            "Livrables liés (preuves)",
            "Décision de transition Run enregistrée",
            "Backlog post-programme créé",
            "Date de clôture + sponsor validateur",
        ],
    },
];

/// Materialize the fresh program state: all ten workshops plus the full
/// item roster, everything in `not_started`.
pub fn provision() -> (Vec<Workshop>, Vec<WorkshopItem>) {
    let workshops = WORKSHOP_CATALOG
        .iter()
        .map(|definition| Workshop {
            workshop_number: definition.workshop_number,
            title: definition.title.to_string(),
            description: definition.description.to_string(),
            status: WorkshopStatus::NotStarted,
            completion_criteria: definition
                .completion_criteria
                .iter()
                .map(|criterion| criterion.to_string())
                .collect(),
            completion_criteria_state: BTreeMap::new(),
        })
        .collect();

    let items = ITEM_CATALOG
        .iter()
        .map(|definition| WorkshopItem {
            item_id: definition.item_id.to_string(),
            workshop_number: definition.workshop_number,
            title: definition.title.to_string(),
            module_name: definition.module_name.to_string(),
            status_requirement: definition.requirement,
            status: ItemStatus::NotStarted,
            acceptance_criteria: definition
                .acceptance_criteria
                .iter()
                .map(|criterion| criterion.to_string())
                .collect(),
            acceptance_state: BTreeMap::new(),
            owner_user_id: None,
            due_date: None,
            notes: String::new(),
            validated_by: None,
            validated_at: None,
        })
        .collect();

    (workshops, items)
}
